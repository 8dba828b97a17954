/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::io::{stdout, BufReader};

use flo_mask::*;

///
/// Masks the lines in a JSON file against a PNG frame, and writes the visible sections to stdout as JSON
///
/// Usage: `mask_png <frame.png> <lines.json> [settings.json] [resolution factor]`
///
pub fn main() -> Result<(), Box<dyn Error>> {
    let args = env::args().collect::<Vec<_>>();
    if args.len() < 3 {
        eprintln!("Usage: {} <frame.png> <lines.json> [settings.json] [resolution factor]", args[0]);
        return Ok(());
    }

    let resolution_factor = match args.get(4) {
        Some(rf) => rf.parse::<f64>()?,
        None => 1.0,
    };

    let frame = ReferenceFrame::from_png(BufReader::new(File::open(&args[1])?), resolution_factor)?;
    let lines = candidate_lines_from_json(&fs::read_to_string(&args[2])?)?;
    let settings = match args.get(3) {
        Some(path) => MaskSettings::from_json(&fs::read_to_string(path)?)?,
        None => MaskSettings::default(),
    };

    let masker = LineMasker::new(CpuMaskBackend::new(frame));
    let masked = masker.mask(&lines, &settings)?;

    let stdout = stdout();
    serde_json::to_writer_pretty(stdout.lock(), &masked)?;
    println!();

    Ok(())
}
