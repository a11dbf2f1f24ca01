use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;

use super::helpers::open_model;

pub fn run<S: DocumentStore>(store: &S, doc: &str) -> Result<CmdResult> {
    let model = open_model(store, doc, true)?;
    Ok(CmdResult::default().with_stats(model.stats()))
}
