//! A single triangle with a color at each corner.

fn main() -> anyhow::Result<()> {
    prism_lessons::run(prism_lessons::lessons::colored_triangle())
}
