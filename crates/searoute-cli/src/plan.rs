//! # Plan Subcommand
//!
//! Plans the cheapest route between two ports that meets a deadline and
//! prints it, with every feasible alternative, as a table or as JSON.
//!
//! Exit codes: 0 when a route was found, 2 when none is feasible, 1 on an
//! error (unknown port, invalid parameter).

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use searoute_core::{parse_overrides, PortCode, RejectedOverride, DEFAULT_CAPACITY_TONS};
use searoute_network::PortNetwork;
use searoute_planner::{Candidate, RoutePlan, RoutePlanner, RouteRequest};

use crate::arrow_path;

/// Exit code when no route meets the deadline.
pub const EXIT_NO_ROUTE: u8 = 2;

/// Arguments for the `searoute plan` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Origin port code.
    #[arg(long)]
    pub from: String,

    /// Destination port code.
    #[arg(long)]
    pub to: String,

    /// Vessel capacity in tons.
    #[arg(long, default_value_t = DEFAULT_CAPACITY_TONS)]
    pub capacity: f64,

    /// Vessel speed in km/h. Defaults to the network's reference speed.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Arrival deadline in hours. Unlimited when omitted.
    #[arg(long)]
    pub deadline: Option<f64>,

    /// Fuel price per km.
    #[arg(long)]
    pub fuel_price: Option<f64>,

    /// Maximum edges per route.
    #[arg(long)]
    pub max_hops: Option<usize>,

    /// Handling-cost overrides, e.g. "HKG:600,SIN:700".
    #[arg(long)]
    pub overrides: Option<String>,

    /// Print the plan as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    fn to_request(&self) -> Result<(RouteRequest, Vec<RejectedOverride>)> {
        let origin = PortCode::parse(&self.from).context("invalid --from")?;
        let destination = PortCode::parse(&self.to).context("invalid --to")?;
        let parse = self
            .overrides
            .as_deref()
            .map(parse_overrides)
            .unwrap_or_default();

        let mut builder = RouteRequest::builder(origin, destination)
            .capacity(self.capacity)
            .overrides(parse.overrides);
        if let Some(speed) = self.speed {
            builder = builder.speed(speed);
        }
        if let Some(deadline) = self.deadline {
            builder = builder.deadline(deadline);
        }
        if let Some(fuel_price) = self.fuel_price {
            builder = builder.fuel_price(fuel_price);
        }
        if let Some(max_hops) = self.max_hops {
            builder = builder.max_hops(max_hops);
        }
        Ok((builder.build(), parse.rejected))
    }
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    best: Option<&'a Candidate>,
    all: &'a [Candidate],
    discarded: usize,
    enumerated: usize,
    skipped_overrides: &'a [RejectedOverride],
}

/// Execute the plan subcommand.
pub fn run_plan(args: &PlanArgs, network: PortNetwork) -> Result<u8> {
    let (request, rejected) = args.to_request()?;
    for skipped in &rejected {
        eprintln!("WARN: skipping override \"{}\": {}", skipped.token, skipped.reason);
    }

    let planner = RoutePlanner::new(network);
    let plan = planner.plan(&request).context("planning failed")?;

    if args.json {
        let output = PlanOutput {
            best: plan.best.as_ref(),
            all: &plan.feasible,
            discarded: plan.over_deadline.len(),
            enumerated: plan.enumerated,
            skipped_overrides: &rejected,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_plan(&plan));
    }

    Ok(if plan.best.is_some() { 0 } else { EXIT_NO_ROUTE })
}

/// Render a plan as human-readable text.
pub fn render_plan(plan: &RoutePlan) -> String {
    let mut out = String::new();
    let Some(best) = &plan.best else {
        out.push_str(&format!(
            "No feasible route ({} enumerated, {} over deadline)\n",
            plan.enumerated,
            plan.over_deadline.len()
        ));
        return out;
    };

    out.push_str(&format!("Best route: {}\n", arrow_path(&best.path)));
    out.push_str(&format!(
        "  cost {:.2}  time {:.2} h  distance {:.2} km  hops {}\n",
        best.score.cost, best.score.time_h, best.score.distance_km, best.score.hops
    ));
    out.push_str(&format!(
        "  handling {:.2}  fuel {:.2}\n\n",
        best.score.handling_cost, best.score.fuel_cost
    ));

    out.push_str(&format!(
        "Feasible routes: {} of {} enumerated ({} over deadline)\n",
        plan.feasible.len(),
        plan.enumerated,
        plan.over_deadline.len()
    ));
    out.push_str(&format!("  {:>10}  {:>10}  {:>4}  PATH\n", "COST", "TIME_H", "HOPS"));
    for c in &plan.feasible {
        out.push_str(&format!(
            "  {:>10.2}  {:>10.2}  {:>4}  {}\n",
            c.score.cost,
            c.score.time_h,
            c.score.hops,
            arrow_path(&c.path)
        ));
    }
    out
}
