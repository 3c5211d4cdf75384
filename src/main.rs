use std::io;
use std::process;

use anyhow::Context;
use log::error;
use protobuf_example::DemoBuilder;

fn run() -> anyhow::Result<()> {
  let demo = DemoBuilder::new().build().context("Can't set up the demo")?;
  let stdout = io::stdout();
  demo.run(&mut stdout.lock()).context("Demo aborted")?;
  Ok(())
}

fn main() {
  env_logger::init();
  if let Err(e) = run() {
    error!("{:#}", e);
    process::exit(1);
  }
}
