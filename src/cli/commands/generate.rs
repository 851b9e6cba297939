use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::AgentSummary;
use crate::ui::messages::info;
use crate::utils::table::Table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        agent,
        cdr,
        format,
        out,
        sort,
        layout,
        force,
    } = cmd
    {
        // CLI overrides win over the configured defaults.
        let cfg_local = Config {
            layout_strategy: layout.unwrap_or(cfg.layout_strategy),
            agent_layout: cfg.agent_layout.clone(),
            cdr_layout: cfg.cdr_layout.clone(),
            detect: cfg.detect.clone(),
            sort: sort.unwrap_or(cfg.sort),
        };

        let summaries =
            ReportLogic::build(&cfg_local, Path::new(agent), Path::new(cdr), cfg_local.sort)?;

        match format {
            None => {
                print_table(&summaries);
                info(format!("{} agent(s) in report", summaries.len()));
            }
            Some(fmt) => {
                let file = out.as_deref().ok_or_else(|| {
                    AppError::Export(format!(
                        "--out is required when exporting to {}",
                        fmt.as_str()
                    ))
                })?;
                ExportLogic::export(&summaries, fmt, file, *force)?;
            }
        }
    }
    Ok(())
}

fn print_table(summaries: &[AgentSummary]) {
    let headers = crate::export::report_headers();
    let rows = summaries
        .iter()
        .map(crate::export::report_row)
        .collect::<Vec<_>>();

    let table = Table::auto_sized(&headers, rows);
    print!("{}", table.render());
}
