//! GitHub REST API fetchers.
//!
//! Commits are windowed by the API's `since` parameter. Releases and pull
//! requests are fetched as a short recent page and windowed client-side.

use chrono::{DateTime, SecondsFormat, Utc};
use daybook_config::RepositoryConfig;
use daybook_model::{CommitRecord, PullRequestRecord, ReleaseRecord, TimeWindow};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{SourceClient, SourceResult};

/// Commits requested per run.
const COMMITS_PER_PAGE: u32 = 100;

/// Most recent releases inspected per run.
const RELEASES_PER_PAGE: u32 = 10;

/// Most recently updated closed pull requests inspected per run.
const PULLS_PER_PAGE: u32 = 30;

/// Commit entry from `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Deserialize)]
struct GitHubCommit {
    sha: String,
    html_url: String,
    commit: GitCommit,
}

#[derive(Debug, Deserialize)]
struct GitCommit {
    message: String,
    author: GitSignature,
}

#[derive(Debug, Deserialize)]
struct GitSignature {
    name: String,
    date: DateTime<Utc>,
}

/// Release entry from `GET /repos/{owner}/{repo}/releases`.
#[derive(Debug, Deserialize)]
struct GitHubRelease {
    tag_name: String,
    name: Option<String>,
    html_url: String,
    published_at: Option<DateTime<Utc>>,
    body: Option<String>,
}

/// Pull request entry from `GET /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Deserialize)]
struct GitHubPull {
    number: u64,
    title: String,
    html_url: String,
    merged_at: Option<DateTime<Utc>>,
}

fn repo_endpoint(repo: &RepositoryConfig, resource: &str) -> String {
    format!(
        "{}/repos/{}/{}/{resource}",
        repo.api_base_url.trim_end_matches('/'),
        repo.owner,
        repo.name
    )
}

/// Fetches commits authored inside the window.
///
/// Returns an empty collection if the API cannot be reached or answers with
/// an error.
pub async fn fetch_commits(
    client: &SourceClient,
    repo: &RepositoryConfig,
    window: &TimeWindow,
) -> Vec<CommitRecord> {
    match try_fetch_commits(client, repo, window).await {
        Ok(commits) => {
            info!(count = commits.len(), repo = %repo.slug(), "fetched commits");
            commits
        }
        Err(err) => {
            warn!(error = %err, repo = %repo.slug(), "failed to fetch commits");
            Vec::new()
        }
    }
}

async fn try_fetch_commits(
    client: &SourceClient,
    repo: &RepositoryConfig,
    window: &TimeWindow,
) -> SourceResult<Vec<CommitRecord>> {
    let url = repo_endpoint(repo, "commits");
    let since = window.start().to_rfc3339_opts(SecondsFormat::Secs, true);

    let commits: Vec<GitHubCommit> = client
        .get_json(
            &url,
            &[
                ("since", since),
                ("per_page", COMMITS_PER_PAGE.to_string()),
            ],
        )
        .await?;

    Ok(commits
        .into_iter()
        .map(|c| {
            CommitRecord::new(
                &c.sha,
                &c.commit.message,
                c.commit.author.name,
                c.commit.author.date,
                c.html_url,
            )
        })
        .collect())
}

/// Fetches releases published inside the window.
///
/// Only the ten most recent releases are inspected. Drafts without a publish
/// date are skipped.
pub async fn fetch_releases(
    client: &SourceClient,
    repo: &RepositoryConfig,
    window: &TimeWindow,
) -> Vec<ReleaseRecord> {
    match try_fetch_releases(client, repo, window).await {
        Ok(releases) => {
            info!(count = releases.len(), repo = %repo.slug(), "fetched releases");
            releases
        }
        Err(err) => {
            warn!(error = %err, repo = %repo.slug(), "failed to fetch releases");
            Vec::new()
        }
    }
}

async fn try_fetch_releases(
    client: &SourceClient,
    repo: &RepositoryConfig,
    window: &TimeWindow,
) -> SourceResult<Vec<ReleaseRecord>> {
    let url = repo_endpoint(repo, "releases");

    let releases: Vec<GitHubRelease> = client
        .get_json(&url, &[("per_page", RELEASES_PER_PAGE.to_string())])
        .await?;

    Ok(releases
        .into_iter()
        .filter_map(|r| {
            let published_at = r.published_at.filter(|ts| window.contains(*ts))?;
            Some(ReleaseRecord::new(
                r.tag_name,
                r.name.as_deref(),
                r.html_url,
                published_at,
                r.body.as_deref(),
            ))
        })
        .collect())
}

/// Fetches pull requests merged inside the window.
///
/// Closed pull requests without a merge timestamp were closed unmerged and
/// are skipped.
pub async fn fetch_pull_requests(
    client: &SourceClient,
    repo: &RepositoryConfig,
    window: &TimeWindow,
) -> Vec<PullRequestRecord> {
    match try_fetch_pull_requests(client, repo, window).await {
        Ok(pulls) => {
            info!(count = pulls.len(), repo = %repo.slug(), "fetched merged pull requests");
            pulls
        }
        Err(err) => {
            warn!(error = %err, repo = %repo.slug(), "failed to fetch pull requests");
            Vec::new()
        }
    }
}

async fn try_fetch_pull_requests(
    client: &SourceClient,
    repo: &RepositoryConfig,
    window: &TimeWindow,
) -> SourceResult<Vec<PullRequestRecord>> {
    let url = repo_endpoint(repo, "pulls");

    let pulls: Vec<GitHubPull> = client
        .get_json(
            &url,
            &[
                ("state", "closed".to_string()),
                ("sort", "updated".to_string()),
                ("direction", "desc".to_string()),
                ("per_page", PULLS_PER_PAGE.to_string()),
            ],
        )
        .await?;

    Ok(pulls
        .into_iter()
        .filter_map(|p| {
            let merged_at = p.merged_at.filter(|ts| window.contains(*ts))?;
            Some(PullRequestRecord::new(
                p.number,
                p.title,
                p.html_url,
                merged_at,
            ))
        })
        .collect())
}
