// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

//! The walkthrough behind the `withhold-demo` binary.
//!
//! Each section builds a fresh [`Holder`], feeds it through one combinator,
//! and prints the outcome. Sections share no state and the text is fixed, so
//! the whole sequence is pinned byte-for-byte by a golden file in the tests.

use crate::{Scoped, run, with};
use anyhow::Result;
use std::io::Write;

/// Two-field record the walkthrough hands to each combinator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Holder {
	pub field1: String,
	pub field2: String,
}

/// The absence marker: a value withheld by a predicate prints as `None`.
fn label(taken: Option<Holder>) -> String {
	taken.map_or_else(|| "None".to_string(), |h| h.field1)
}

/// Write the full demonstration sequence to `out`.
pub fn render(out: &mut impl Write) -> Result<()> {
	writeln!(out, "scope function demo: apply, also, with, let_in, run, take_if, take_unless")?;

	// apply: mutate through &mut, get the same holder back
	writeln!(out)?;
	writeln!(out, "apply")?;
	let applied = Holder::default().apply(|h| {
		h.field1 = "changed through apply".to_string();
		let _ = writeln!(out, "the block runs first and gets &mut access");
	});
	writeln!(out, "{}", applied.field1)?;

	// also: the second call shape for the same pattern
	writeln!(out)?;
	writeln!(out, "also")?;
	let alsoed = Holder::default().also(|h| {
		h.field1 = "changed through also".to_string();
		let _ = writeln!(out, "same contract as apply, different name at the call site");
	});
	writeln!(out, "{}", alsoed.field1)?;

	// with: read a result out of a borrowed holder, no mutation
	writeln!(out)?;
	writeln!(out, "with")?;
	let holder = Holder::default().apply(|h| h.field1 = "some value".to_string());
	let with_transform = with(&holder, |h| h.field1.clone());
	writeln!(out, "withTransform: {with_transform}")?;

	// let_in: mutate, then throw the holder away and return something else
	writeln!(out)?;
	writeln!(out, "let_in")?;
	let demo2 = Holder::default().let_in(|mut h| {
		h.field1 = "changed using let".to_string();
		"Who cares!  I was returned from a let"
	});
	writeln!(out, "demo2='{demo2}'")?;

	// run, block form: no receiver at all
	writeln!(out)?;
	writeln!(out, "run (block form)")?;
	let result = run(|| {
		let _ = writeln!(out, "I am running stuff");
		"I ran"
	});
	writeln!(out, "result: {result}")?;

	// run, receiver form: the mutation never surfaces, only the block result does
	writeln!(out)?;
	writeln!(out, "run (receiver form)")?;
	let returned = Holder::default().run(|h| {
		h.field2 = "doesn't matter, won't even get returned".to_string();
		"I created an object for no reason!"
	});
	writeln!(out, "returned: {returned}")?;

	// take_if: keep the holder only when the predicate holds
	writeln!(out)?;
	writeln!(out, "take_if")?;
	let matched = Holder::default().apply(|h| h.field1 = "something".to_string()).take_if(|h| h.field1 == "something");
	writeln!(out, "take_if match: {}", label(matched))?;
	let missed = Holder::default().apply(|h| h.field1 = "something".to_string()).take_if(|h| h.field1 == "something1");
	writeln!(out, "take_if miss: {}", label(missed))?;

	// take_unless: keep the holder only when the predicate fails
	writeln!(out)?;
	writeln!(out, "take_unless")?;
	let kept = Holder::default().apply(|h| h.field1 = "something".to_string()).take_unless(|h| h.field1 == "somethingElse");
	writeln!(out, "take_unless match: {}", label(kept))?;
	let withheld = Holder::default().apply(|h| h.field1 = "something".to_string()).take_unless(|h| h.field1 == "something");
	writeln!(out, "take_unless miss: {}", label(withheld))?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rendered() -> String {
		let mut buf = Vec::new();
		render(&mut buf).expect("rendering into a Vec cannot fail");
		String::from_utf8(buf).expect("demo output is UTF-8")
	}

	#[test]
	fn holder_fields_default_to_empty_strings() {
		let holder = Holder::default();
		assert_eq!(holder.field1, "");
		assert_eq!(holder.field2, "");
	}

	#[test]
	fn prints_the_values_set_during_construction() {
		let output = rendered();
		assert!(output.contains("changed through apply"));
		assert!(output.contains("changed through also"));
		assert!(output.contains("withTransform: some value"));
	}

	#[test]
	fn let_in_prints_the_sentinel_not_a_field() {
		let output = rendered();
		assert!(output.contains("demo2='Who cares!  I was returned from a let'"));
		assert!(
			!output.contains("changed using let"),
			"let_in must print the block result, not the mutated field"
		);
	}

	#[test]
	fn run_sections_print_block_results() {
		let output = rendered();
		assert!(output.contains("result: I ran"));
		assert!(output.contains("returned: I created an object for no reason!"));
		assert!(
			!output.contains("doesn't matter, won't even get returned"),
			"field2 never surfaces from the receiver-form run"
		);
	}

	#[test]
	fn conditional_sections_print_value_or_absence_marker() {
		let output = rendered();
		assert!(output.contains("take_if match: something"));
		assert!(output.contains("take_if miss: None"));
		assert!(output.contains("take_unless match: something"));
		assert!(output.contains("take_unless miss: None"));
	}

	#[test]
	fn block_notes_print_before_the_value_lines() {
		let output = rendered();
		let note = output.find("the block runs first").expect("apply note present");
		let value = output.find("changed through apply").expect("apply value present");
		assert!(note < value, "the apply block must run before its result is printed");
	}

	#[test]
	fn rendering_twice_is_byte_identical() {
		assert_eq!(rendered(), rendered(), "output must be deterministic");
	}
}
