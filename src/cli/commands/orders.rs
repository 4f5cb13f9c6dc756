use anyhow::Result;
use std::fmt::Write;
use tracing::info;

use crate::config::AppConfig;
use crate::schemas::ModelResponse;

pub fn orders(config: &AppConfig) -> Result<()> {
    let search = config.order_search();
    info!(
        "Searching ARIMA orders up to p={}, d={}, q={}",
        search.max_p, search.max_d, search.max_q
    );

    let (_, bank) = config.load_models()?;
    print!("{}", render_orders(&ModelResponse::from_bank(&bank)));
    Ok(())
}

pub fn render_orders(models: &[ModelResponse]) -> String {
    let mut table = String::new();
    for model in models {
        let aic = model
            .aic
            .map(|aic| format!("{:.3}", aic))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            table,
            "{:<30} {:<14} aic={:<12} n={}",
            model.indicator.column_name(),
            model.model,
            aic,
            model.observations
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_bank, sample_store};

    #[test]
    fn test_one_line_per_indicator() {
        let store = sample_store();
        let models = ModelResponse::from_bank(&sample_bank(&store));

        let table = render_orders(&models);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("GDP "));
        assert!(lines[0].contains("ARIMA("));
        assert!(lines[3].starts_with("Adjusted_Net_National_Income"));
    }
}
