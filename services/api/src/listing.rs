use clap::Args;
use job_board::error::AppError;
use job_board::jobs::{select_postings, EntityStore, OrganizationDirectory, PostingFilter};

#[derive(Args, Debug, Default)]
pub(crate) struct PostingsArgs {
    /// Minimum salary, inclusive
    #[arg(long)]
    pub(crate) salary_min: Option<i64>,
    /// Comma separated tags; a posting matches when it carries any of them
    #[arg(long, value_delimiter = ',')]
    pub(crate) tags: Vec<String>,
    /// Comma separated organization ids
    #[arg(long, value_delimiter = ',')]
    pub(crate) organizations: Vec<String>,
}

impl From<PostingsArgs> for PostingFilter {
    fn from(args: PostingsArgs) -> Self {
        // An omitted flag leaves the dimension open; `--tags ,` filters to nothing.
        let clean = |values: Vec<String>| -> Option<Vec<String>> {
            (!values.is_empty()).then(|| {
                values
                    .into_iter()
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .collect()
            })
        };

        PostingFilter {
            min_compensation: args.salary_min,
            organizations: clean(args.organizations),
            tags: clean(args.tags),
        }
    }
}

pub(crate) fn render_postings(args: PostingsArgs) -> Result<String, AppError> {
    let store = EntityStore::seeded();
    let filter = PostingFilter::from(args);
    let selected = select_postings(
        &store.snapshot_postings(),
        &filter,
        &OrganizationDirectory::standard(),
    );
    Ok(serde_json::to_string_pretty(&selected)?)
}

pub(crate) fn print_postings(args: PostingsArgs) -> Result<(), AppError> {
    println!("{}", render_postings(args)?);
    Ok(())
}
