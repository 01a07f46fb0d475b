//! Round-trips a rectangle through JSON.

use css_kata::{Rectangle, Revive, shape};

fn main() -> css_kata::Result<()> {
    css_kata::init_logger("shapes.log")?;

    let rect = Rectangle::new(10, 20);
    let json = shape::serialize(&rect)?;
    println!("{json}");

    let revived = Rectangle::revive(&json)?;
    println!(
        "{} x {} = {}",
        revived.width,
        revived.height,
        revived.area()
    );

    Ok(())
}
