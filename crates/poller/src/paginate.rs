//! Cursor-following accumulation of a workflow's execution history.

use async_trait::async_trait;

use crate::error::PollError;
use crate::model::{Execution, ExecutionPage};

/// Page size requested from the executions endpoint (the API maximum).
pub const PAGE_LIMIT: u32 = 250;

/// One page fetch against the executions endpoint.
///
/// Implemented by [`N8nClient`](crate::client::N8nClient); tests script page
/// sequences through a fake source.
#[async_trait]
pub trait ExecutionSource: Send + Sync {
    /// Fetch a single page for `workflow_id`, continuing from `cursor` when
    /// present.
    async fn fetch_page(
        &self,
        workflow_id: &str,
        cursor: Option<&str>,
    ) -> Result<ExecutionPage, PollError>;
}

/// Accumulate every execution of one workflow across pages.
///
/// An absent `nextCursor` is the only termination signal; an empty page that
/// still carries a cursor keeps the loop going. The first failed fetch aborts
/// with no partial result.
pub async fn collect_executions<S>(
    source: &S,
    workflow_id: &str,
) -> Result<Vec<Execution>, PollError>
where
    S: ExecutionSource + ?Sized,
{
    let mut executions = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0u32;

    loop {
        let page = source.fetch_page(workflow_id, cursor.as_deref()).await?;
        pages += 1;

        tracing::debug!(
            workflow_id = %workflow_id,
            page = pages,
            count = page.data.len(),
            "Retrieved executions page"
        );

        executions.extend(page.data);

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    tracing::debug!(
        workflow_id = %workflow_id,
        total = executions.len(),
        pages,
        "Execution history collected"
    );

    Ok(executions)
}
