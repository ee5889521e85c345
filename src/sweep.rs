use chrono::{DateTime, Utc};
use tracing::debug;

use std::io::Write;

use crate::errors::{Error, Result};
use crate::github::MilestoneApi;
use crate::model::Milestone;

pub const DAYS_PAST_DUE: i64 = 7;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub examined: usize,
    pub past_due: usize,
    pub with_open_issues: usize,
}

/// Whole days elapsed from `due` to `now`, truncated toward zero.
pub fn days_past(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let hours = (now - due).num_milliseconds() as f64 / 3_600_000.0;
    (hours / 24.0) as i64
}

pub fn is_past_due(milestone: &Milestone, now: DateTime<Utc>) -> Result<bool> {
    if !milestone.is_open() {
        return Ok(false);
    }
    let due_on = match milestone.due_on() {
        Some(due_on) => due_on,
        None => return Ok(false),
    };
    let due = DateTime::parse_from_rfc3339(due_on)
        .map_err(|source| Error::DueDate {
            number: milestone.number,
            value: due_on.to_owned(),
            source,
        })?
        .with_timezone(&Utc);
    Ok(days_past(due, now) >= DAYS_PAST_DUE)
}

/// The first error stops the walk; lines already written stay written.
pub async fn sweep<A, W>(api: &A, now: DateTime<Utc>, out: &mut W) -> Result<Summary>
where
    A: MilestoneApi + ?Sized,
    W: Write,
{
    let milestones = api.open_milestones().await?;
    let mut summary = Summary {
        examined: milestones.len(),
        ..Default::default()
    };

    for milestone in &milestones {
        if !is_past_due(milestone, now)? {
            debug!(number = milestone.number, title = %milestone.title, "not past due");
            continue;
        }
        summary.past_due += 1;

        let issues = api.open_issues(milestone.number).await?;
        debug!(
            number = milestone.number,
            url = %milestone.url,
            open_issues = issues.len(),
            "past due"
        );
        if !issues.is_empty() {
            summary.with_open_issues += 1;
            writeln!(
                out,
                "Milestone '{}' (#{}) still has open issues",
                milestone.title, milestone.number
            )?;
        }
    }

    Ok(summary)
}
