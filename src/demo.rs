//! The three walkthroughs run by the binary. Each prints what it does and
//! operates on the record it is given, so running them in sequence carries
//! state from one to the next.

use clap::ValueEnum;

use crate::error::{DemoError, GuardError, RecordError};
use crate::guard::GuardedView;
use crate::record::{HEALTH, POINTS, SKILLS, SharedRecord};
use crate::reflect;
use crate::types::Symbol;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    Symbol,
    Proxy,
    Reflect,
    All,
}

impl Demo {
    fn includes(self, other: Demo) -> bool {
        self == Demo::All || self == other
    }
}

/// Run the selected walkthroughs in order symbol, proxy, reflect.
pub fn run(which: Demo, record: &SharedRecord) -> Result<(), DemoError> {
    if which.includes(Demo::Symbol) {
        symbols(record)?;
    }
    if which.includes(Demo::Proxy) {
        guarded(record)?;
    }
    if which.includes(Demo::Reflect) {
        reflective(record)?;
    }
    Ok(())
}

/// Attach a symbol-keyed id and show which enumerations see it.
pub fn symbols(record: &SharedRecord) -> Result<Symbol, RecordError> {
    let id = Symbol::new("id");
    record.borrow_mut().set(&id, 12345)?;

    let record = record.borrow();
    for name in record.enumerable_names() {
        if let Some(value) = record.get(name.as_str()) {
            println!("{} {}", name, value);
        }
    }
    if let Some(value) = record.get(&id) {
        println!("Player ID: {}", value);
    }
    println!("Player properties: {}", Value::from(record.names()));
    println!("Player properties (symbols): {}", Value::from(record.symbols()));
    Ok(id)
}

/// Exercise the guarded view: rejected and accepted writes, reads of
/// present and missing fields, key enumeration.
pub fn guarded(record: &SharedRecord) -> Result<(), GuardError> {
    let view = GuardedView::new(record);

    println!("{}", view.get(HEALTH));
    // Both rejections are reported by the view itself.
    let _ = view.set(HEALTH, 110);
    view.set(HEALTH, 90)?;

    println!("---------------- Writes through the view land on the shared record ----------------");
    println!("{}", view);
    println!("{}", record.borrow());

    let _ = view.set(POINTS, "cien");
    view.set(POINTS, 100)?;
    println!("{}", view.get(POINTS));

    view.push(SKILLS, "Fuerza")?;
    println!("{}", view.get(SKILLS));

    println!("{}", view.get("level"));

    println!("{}", Value::from(view.own_keys()));
    println!("{}", Value::from(view.own_symbols()));
    Ok(())
}

/// The raw accessors: no validation, only attribute flags apply.
pub fn reflective(record: &SharedRecord) -> Result<(), RecordError> {
    let health = reflect::get(record, HEALTH).unwrap_or_default();
    println!("Current health: {}", health);

    reflect::set(record, "level", 1)?;
    println!("{}", record.borrow());

    let has_points = reflect::has(record, POINTS);
    println!("Does the player have points?: {}", has_points);

    reflect::delete(record, HEALTH)?;
    println!("{}", record.borrow());

    reflect::define(record, "name", "Warrior", true, true, true)?;
    println!("{}", record.borrow());

    let keys: Vec<String> = reflect::own_keys(record)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Player properties: {}", keys.join(","));
    Ok(())
}
