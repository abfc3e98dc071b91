use anyhow::Context;
use clap::Parser;
use nuthatch::walkthrough;

#[derive(Parser)]
enum Options {
    Syntax,
    Query,
    Usings,
    Bind,
}

fn main() -> anyhow::Result<()> {
    let report = match Options::parse() {
        Options::Syntax => walkthrough::syntax().context("the syntax walkthrough failed")?,
        Options::Query => walkthrough::query().context("the query walkthrough failed")?,
        Options::Usings => walkthrough::usings(),
        Options::Bind => walkthrough::bind().context("the binding walkthrough failed")?,
    };

    print!("{report}");
    Ok(())
}
