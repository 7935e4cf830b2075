use anyhow::Result;
use vergen::EmitBuilder;

// Short SHA is appended to `csvkml --version` when the build runs inside a git checkout.
fn main() -> Result<()> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
