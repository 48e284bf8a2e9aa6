//! REPL command handlers.
//!
//! Each handler mutates the simulated game state or emits host signals
//! into the bus; the monitor service only ever sees the result through
//! its subscription, exactly as it would in the real client.

use std::io::Write;

use lbchime_core::HostSignal;

use crate::CliContext;

/// The `/lb` chat command: flip monitoring and (un)wire the host
/// subscription to match. Any trailing command text was already ignored.
pub fn toggle(ctx: &mut CliContext) {
    let enabled = ctx.service.borrow_mut().toggle();
    if enabled {
        ctx.attach();
    } else {
        ctx.detach();
    }
}

/// Advance the simulated frame loop
pub fn tick(ctx: &mut CliContext, count: u32) {
    for _ in 0..count {
        ctx.bus.emit(&HostSignal::FrameTick);
    }
}

/// Emit one duty lifecycle signal
pub fn duty(ctx: &mut CliContext, signal: HostSignal) {
    ctx.bus.emit(&signal);
}

pub fn set_gauge(ctx: &mut CliContext, units: u16, bars: u8) {
    ctx.game.borrow_mut().set_gauge(units, bars);
    println!("gauge: {units} units across {bars} bar(s)");
}

pub fn clear_gauge(ctx: &mut CliContext) {
    ctx.game.borrow_mut().clear_gauge();
    println!("gauge controller unavailable");
}

pub fn set_cast(ctx: &mut CliContext, action_id: u32, idle: bool) {
    ctx.game.borrow_mut().set_cast(action_id, !idle);
    println!(
        "cast: action {action_id} ({})",
        if idle { "idle" } else { "casting" }
    );
}

pub fn clear_cast(ctx: &mut CliContext) {
    ctx.game.borrow_mut().clear_cast();
    println!("cast subject removed");
}

pub fn set_party(ctx: &mut CliContext, size: usize) {
    ctx.game.borrow_mut().party_size = size;
    println!("party size: {size}");
}

pub fn show_config(ctx: &CliContext) {
    println!("{:#?}", ctx.config);
}

pub fn exit(ctx: &mut CliContext) {
    ctx.detach();
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
