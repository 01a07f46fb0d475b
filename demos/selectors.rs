//! Builds a few selectors and prints them.
//!
//! Run with `cargo run --example selectors`; rejected fragments are logged to
//! `selectors.log`.

use css_kata::{Combinator, combine, selector};

fn main() -> css_kata::Result<()> {
    css_kata::init_logger_with_level("selectors.log", log::LevelFilter::Trace)?;

    let link = selector::element("a")?
        .attr(r#"href$=".png""#)?
        .pseudo_class("focus")?;
    let editor = selector::id("main")?.class("container")?.class("editable")?;
    let heading = selector::element("h1")?.pseudo_element("first-letter")?;

    for sel in [&link, &editor, &heading] {
        println!("{:<40} specificity {:?}", sel.stringify(), sel.specificity());
    }

    let sibling = combine(&editor, Combinator::AdjacentSibling, &link);
    let nested = combine(&sibling, ">", &heading);
    println!("{nested}");

    match selector::class("late")?.id("early") {
        Ok(sel) => println!("unexpectedly built {sel}"),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
