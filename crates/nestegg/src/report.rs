//! Plain-text rendering of profiles and projection outcomes

use nestegg_core::model::{AccountKind, SimulationInput, SimulationSummary};
use nestegg_core::store::FlowKind;

/// Print the outcome of a projection run.
pub fn render_summary(summary: &SimulationSummary) {
    println!(
        "Success rate: {:.2}%  ({})",
        summary.percent_success,
        summary.rating().label()
    );
    if summary.average_final_balance != 0.0 {
        println!(
            "Average final balance: {}",
            dollars(summary.average_final_balance)
        );
    }

    let years = summary.projection_years();
    if years > 0 && !summary.percentile_50.is_empty() {
        println!();
        println!("{:>4}  {:>14} {:>14} {:>14} {:>14} {:>14}", "year", "p10", "p25", "p50", "p75", "p90");
        for year in 0..years {
            println!(
                "{year:>4}  {:>14} {:>14} {:>14} {:>14} {:>14}",
                series_at(&summary.percentile_10, year),
                series_at(&summary.percentile_25, year),
                series_at(&summary.percentile_50, year),
                series_at(&summary.percentile_75, year),
                series_at(&summary.percentile_90, year),
            );
        }
    }

    if !summary.extra.is_empty() {
        println!();
        for (key, value) in &summary.extra {
            println!("{key}: {value}");
        }
    }
}

/// Print what a profile document will send to the engine.
pub fn render_profile(input: &SimulationInput) {
    let params = input.simulation_params;
    println!(
        "Ages {} to {}, inflation {:.1}%, default tax {:.1}%, {} iterations",
        params.current_age,
        params.retirement_age,
        params.inflation_rate * 100.0,
        params.default_tax_rate * 100.0,
        params.iterations
    );

    for kind in AccountKind::ALL {
        let holdings = input.holdings(kind);
        if holdings.is_empty() {
            continue;
        }
        println!();
        println!("{} ({}):", kind.label(), holdings.len());
        for holding in holdings {
            let mut line = format!(
                "  {} - {} at {:.1}% +/- {:.1}%",
                holding.name,
                dollars(holding.balance),
                holding.expected_return * 100.0,
                holding.return_std_dev * 100.0
            );
            if let Some(property) = &holding.property {
                line.push_str(&format!(
                    ", basis {}, owing {}",
                    dollars(property.cost_basis),
                    dollars(property.liability)
                ));
                if property.withdrawn {
                    line.push_str(", withdrawn");
                }
            }
            if !holding.contributions.is_empty() {
                line.push_str(&format!(
                    ", {} scheduled contribution(s)",
                    holding.contributions.len()
                ));
            }
            println!("{line}");
        }
    }

    for flows in FlowKind::ALL {
        let list = match flows {
            FlowKind::Incomes => &input.incomes,
            FlowKind::Expenses => &input.expenses,
        };
        if list.is_empty() {
            continue;
        }
        println!();
        println!("{} ({}):", flows.collection_key(), list.len());
        for flow in list {
            let state = if flow.active { "" } else { " [inactive]" };
            let linked = flow
                .linked_holding
                .and_then(|id| input.find_holding(id))
                .map(|holding| format!(" -> {}", holding.name))
                .unwrap_or_default();
            println!(
                "  {} - {}/yr from age {} to {}{state}{linked}",
                flow.name,
                dollars(flow.amount),
                flow.start_age,
                flow.end_age
            );
        }
    }
}

fn series_at(series: &[f64], year: usize) -> String {
    series.get(year).map(|v| dollars(*v)).unwrap_or_else(|| "-".to_string())
}

/// `$1,234,567` formatting; fractions of a dollar are noise at this scale.
fn dollars(value: f64) -> String {
    let negative = value < 0.0;
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
