// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

fn main() -> ExitCode {
	// Arguments are accepted but unused: the walkthrough never varies.
	let mut stdout = std::io::stdout().lock();
	match withhold::demo::render(&mut stdout) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("Error: {err:?}");
			ExitCode::FAILURE
		}
	}
}
