use super::ui;
use crate::core::{ExchangeEntry, Rates};
use anyhow::{Result, anyhow};
use comfy_table::Cell;
use tracing::{debug, info};

/// Renders a rate table relative to `src_unit`, sorted by unit code.
pub fn display_rates(src_unit: &str, rates: &Rates) -> String {
    let mut units: Vec<_> = rates.iter().collect();
    units.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Rate (per 1 {src_unit})")),
    ]);

    for (unit, rate) in units {
        table.add_row(vec![Cell::new(unit), ui::rate_cell(*rate, unit == src_unit)]);
    }

    format!(
        "Base: {}\n\n{}",
        ui::style_text(src_unit, ui::StyleType::Title),
        table
    )
}

fn resolve_unit(entry: &ExchangeEntry, unit: Option<&str>) -> String {
    unit.map_or_else(|| entry.base_unit().to_string(), str::to_uppercase)
}

pub async fn list(entry: &ExchangeEntry, unit: Option<&str>) -> Result<()> {
    let unit = resolve_unit(entry, unit);
    let rates = entry.list_currency(&unit).await;
    if rates.is_empty() {
        return Err(anyhow!("No rates available for {unit}"));
    }

    println!("{}", display_rates(&unit, &rates));
    Ok(())
}

pub async fn rate(entry: &ExchangeEntry, src_unit: &str, target_unit: &str) -> Result<()> {
    let rate = entry
        .get_currency(src_unit, target_unit)
        .await
        .ok_or_else(|| anyhow!("No rate available from {src_unit} to {target_unit}"))?;

    println!(
        "1 {} = {} {}",
        ui::style_text(&src_unit.to_uppercase(), ui::StyleType::Label),
        ui::style_text(&format!("{rate:.2}"), ui::StyleType::Value),
        target_unit.to_uppercase()
    );
    Ok(())
}

pub async fn convert(
    entry: &ExchangeEntry,
    src_unit: &str,
    target_unit: &str,
    amount: f64,
) -> Result<()> {
    let converted = entry
        .convert(src_unit, target_unit, amount)
        .await
        .ok_or_else(|| anyhow!("Cannot convert from {src_unit} to {target_unit}"))?;

    println!(
        "{amount:.2} {} = {} {}",
        ui::style_text(&src_unit.to_uppercase(), ui::StyleType::Label),
        ui::style_text(&format!("{converted:.2}"), ui::StyleType::Value),
        target_unit.to_uppercase()
    );
    Ok(())
}

fn watch_frame(unit: &str, rates: &Rates) -> String {
    let body = if rates.is_empty() {
        ui::style_text(
            &format!("No rates available for {unit} yet"),
            ui::StyleType::Error,
        )
    } else {
        display_rates(unit, rates)
    };
    format!(
        "{body}\n{}",
        ui::style_text(
            "Waiting for next sync, press Ctrl-C to stop",
            ui::StyleType::Subtle
        )
    )
}

/// Prints the rate table now and after every completed sync pass until Ctrl-C.
pub async fn watch(entry: &ExchangeEntry, unit: Option<&str>) -> Result<()> {
    let stop = async {
        tokio::signal::ctrl_c().await?;
        info!("Received Ctrl-C, stopping watch");
        Ok::<_, anyhow::Error>(())
    };
    watch_until(entry, unit, stop, |frame| println!("{frame}")).await
}

async fn watch_until<F>(
    entry: &ExchangeEntry,
    unit: Option<&str>,
    stop: F,
    mut emit: impl FnMut(String),
) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let unit = resolve_unit(entry, unit);
    let mut updates = entry.sync_updates();
    tokio::pin!(stop);

    loop {
        updates.borrow_and_update();
        let rates = entry.list_currency(&unit).await;
        debug!(unit = %unit, count = rates.len(), "Displaying rates");
        emit(watch_frame(&unit, &rates));

        tokio::select! {
            changed = updates.changed() => {
                changed.map_err(|_| anyhow!("Exchange entry went away"))?;
            }
            res = &mut stop => return res,
        }
    }
}
