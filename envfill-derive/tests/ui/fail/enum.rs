use envfill::EnvFill;

#[derive(EnvFill)]
pub enum Mode { Fast, Slow }

fn main() {
    let _ = [Mode::Fast, Mode::Slow];
}
