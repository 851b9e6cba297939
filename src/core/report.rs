//! High-level report pipeline: ingest both exports, resolve layouts,
//! normalize, aggregate, join, sort.

use crate::config::Config;
use crate::core::{aggregate, join, normalize};
use crate::errors::AppResult;
use crate::ingest;
use crate::models::AgentSummary;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation-layer row ordering. The metrics themselves are
/// order-independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the source row order of the agent export.
    #[default]
    None,
    /// Descending by net login time.
    NetLogin,
    /// Descending by matured-call count.
    Matured,
}

/// High-level business logic for the `generate` command.
pub struct ReportLogic;

impl ReportLogic {
    /// Build the per-agent summary report from the two export files.
    ///
    /// Pure batch transform: reads both files fully, computes, and
    /// returns the rows to the caller. Nothing is cached or shared
    /// between invocations.
    pub fn build(
        cfg: &Config,
        agent_file: &Path,
        cdr_file: &Path,
        sort: SortOrder,
    ) -> AppResult<Vec<AgentSummary>> {
        let agent_sheet = ingest::load_sheet(agent_file)?;
        let cdr_sheet = ingest::load_sheet(cdr_file)?;

        let agent_cols = cfg
            .agent_layout
            .resolve(&agent_sheet, cfg.layout_strategy, &cfg.detect)?;
        let cdr_cols = cfg
            .cdr_layout
            .resolve(&cdr_sheet, cfg.layout_strategy, &cfg.detect)?;

        let mut agents = normalize::normalize_agents(&agent_sheet, &agent_cols);
        let calls = normalize::normalize_calls(&cdr_sheet, &cdr_cols);

        let counts = aggregate::aggregate_calls(&calls);

        // Sort before formatting, while the seconds are still at hand.
        // sort_by is stable, so ties keep source order.
        match sort {
            SortOrder::None => {}
            SortOrder::NetLogin => {
                agents.sort_by(|a, b| b.net_login_secs().cmp(&a.net_login_secs()));
            }
            SortOrder::Matured => {
                agents.sort_by(|a, b| {
                    let ma = counts.get(&a.id).map(|c| c.total_matured).unwrap_or(0);
                    let mb = counts.get(&b.id).map(|c| c.total_matured).unwrap_or(0);
                    mb.cmp(&ma)
                });
            }
        }

        Ok(join::join(&agents, &counts))
    }
}
