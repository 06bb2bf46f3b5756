use anyhow::Context;
use lvsm_common::config::Config;
use lvsm_core::director::{DirectorQuery, Query};
use lvsm_core::pager;
use lvsm_core::runner::SystemRunner;

/// Lists one of the director's tables through the configured pager.
pub fn show_table(config: &Config, query: Query) -> anyhow::Result<()> {
    let lines: Vec<String> = DirectorQuery::new(&SystemRunner, config)
        .lines(query)
        .with_context(|| format!("querying {query:?}"))?;

    pager::display(&config.pager, &lines)?;
    Ok(())
}
