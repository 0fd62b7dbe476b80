//! Rewrites for calls to well-known JavaScript builtins.
//!
//! When a call's callee is `receiver.name` and `name` is in this table, the
//! entry produces the whole replacement fragment for the call and default
//! call emission is skipped. Chained rewrites on the result of another
//! rewritten call (`s.substr(1).toLowerCase()`) are not supported.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use esphp_ast::Node;

use crate::emitter::Printer;

/// The call an override rewrites: `receiver.property(arguments)`.
#[derive(Clone, Copy, Debug)]
pub struct OverrideCall<'a> {
    pub receiver: &'a Node,
    pub property: &'a str,
    pub arguments: &'a [Node],
}

/// Produces the complete replacement text for an overridden call.
pub type RewriteFn = fn(&mut Printer<'_>, &OverrideCall<'_>) -> String;

static OVERRIDES: Lazy<FxHashMap<&'static str, RewriteFn>> = Lazy::new(|| {
    let entries: [(&'static str, RewriteFn); 14] = [
        ("push", rewrite_push),
        ("pop", rewrite_pop),
        ("shift", rewrite_shift),
        ("unshift", rewrite_unshift),
        ("join", rewrite_join),
        ("split", rewrite_split),
        ("toUpperCase", rewrite_to_upper_case),
        ("toLowerCase", rewrite_to_lower_case),
        ("trim", rewrite_trim),
        ("charAt", rewrite_char_at),
        ("substr", rewrite_substr),
        ("replace", rewrite_replace),
        ("keys", rewrite_keys),
        ("toString", rewrite_to_string),
    ];
    entries.into_iter().collect()
});

#[must_use]
pub fn lookup_override(property: &str) -> Option<RewriteFn> {
    OVERRIDES.get(property).copied()
}

#[must_use]
pub fn is_override(property: &str) -> bool {
    OVERRIDES.contains_key(property)
}

/// Every overridden property name, sorted.
#[must_use]
pub fn override_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = OVERRIDES.keys().copied().collect();
    names.sort_unstable();
    names
}

// =============================================================================
// Entries
// =============================================================================

fn php_call(function: &str, args: impl IntoIterator<Item = String>) -> String {
    let args: Vec<String> = args.into_iter().collect();
    format!("{function}({})", args.join(", "))
}

fn rewrite_push(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    let receiver = printer.emit_receiver(call.receiver);
    let args = printer.emit_arguments(call.arguments);
    php_call("array_push", std::iter::once(receiver).chain(args))
}

fn rewrite_pop(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    php_call("array_pop", [printer.emit_receiver(call.receiver)])
}

fn rewrite_shift(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    php_call("array_shift", [printer.emit_receiver(call.receiver)])
}

fn rewrite_unshift(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    let receiver = printer.emit_receiver(call.receiver);
    let args = printer.emit_arguments(call.arguments);
    php_call("array_unshift", std::iter::once(receiver).chain(args))
}

/// `a.join()` joins with a comma, as in JavaScript.
fn rewrite_join(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    let receiver = printer.emit_receiver(call.receiver);
    let separator = printer
        .emit_arguments(call.arguments)
        .into_iter()
        .next()
        .unwrap_or_else(|| "','".to_string());
    php_call("implode", [separator, receiver])
}

/// `s.split()` with no separator yields a one-element array.
fn rewrite_split(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    let receiver = printer.emit_receiver(call.receiver);
    let mut args = printer.emit_arguments(call.arguments).into_iter();
    match args.next() {
        Some(separator) => php_call("explode", [separator, receiver].into_iter().chain(args)),
        None => php_call("array", [receiver]),
    }
}

fn rewrite_to_upper_case(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    php_call("strtoupper", [printer.emit_receiver(call.receiver)])
}

fn rewrite_to_lower_case(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    php_call("strtolower", [printer.emit_receiver(call.receiver)])
}

fn rewrite_trim(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    php_call("trim", [printer.emit_receiver(call.receiver)])
}

fn rewrite_char_at(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    let receiver = printer.emit_receiver(call.receiver);
    let index = printer
        .emit_arguments(call.arguments)
        .into_iter()
        .next()
        .unwrap_or_else(|| "0".to_string());
    php_call("substr", [receiver, index, "1".to_string()])
}

fn rewrite_substr(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    let receiver = printer.emit_receiver(call.receiver);
    let args = printer.emit_arguments(call.arguments);
    php_call("substr", std::iter::once(receiver).chain(args))
}

fn rewrite_replace(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    let receiver = printer.emit_receiver(call.receiver);
    let mut args = printer.emit_arguments(call.arguments).into_iter();
    let search = args.next().unwrap_or_else(|| "null".to_string());
    let replacement = args.next().unwrap_or_else(|| "null".to_string());
    php_call("str_replace", [search, replacement, receiver])
}

/// `Object.keys(o)` lists the keys of its argument; the receiver only names
/// the builtin. Without arguments the receiver itself is the collection.
fn rewrite_keys(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    match call.arguments.first() {
        Some(_) => {
            let args = printer.emit_arguments(call.arguments);
            php_call("array_keys", args.into_iter().take(1))
        }
        None => php_call("array_keys", [printer.emit_receiver(call.receiver)]),
    }
}

fn rewrite_to_string(printer: &mut Printer<'_>, call: &OverrideCall<'_>) -> String {
    php_call("strval", [printer.emit_receiver(call.receiver)])
}

#[cfg(test)]
#[path = "tests/overrides_tests.rs"]
mod overrides_tests;
