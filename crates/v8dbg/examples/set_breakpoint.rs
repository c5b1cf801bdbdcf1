//! Sets one breakpoint in a running `node --debug` process, prints where the
//! engine actually bound it, then clears it again.
//!
//! Usage: `cargo run --example set_breakpoint -- 127.0.0.1:5858 app.js 3`

use v8dbg::{
    BreakpointDefinition, ClearBreakpointCommand, DebuggerClient, FilePosition,
    SetBreakpointCommand,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let addr = args.next().unwrap_or_else(|| "127.0.0.1:5858".to_string());
    let file = args.next().unwrap_or_else(|| "app.js".to_string());
    let line: u32 = args.next().as_deref().unwrap_or("0").parse()?;

    let mut client = DebuggerClient::connect(&addr)?;

    let breakpoint = BreakpointDefinition::new(FilePosition::new(file, line, 0));
    let command = SetBreakpointCommand::new(&breakpoint, None, false, false);
    let result = client.send(&command)?;
    println!(
        "breakpoint {} bound at {}:{} (script {:?})",
        result.breakpoint_id, result.line, result.column, result.script_id
    );

    client.send(&ClearBreakpointCommand::new(result.breakpoint_id))?;
    Ok(())
}
