use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;

use crate::charset::CharacterClass;
use crate::strength;

pub fn test_password<W: Write>(password: &str, check_confusion: bool, out: &mut W) -> Result<()> {
    let score = strength::score(password);
    writeln!(out, "{}", strength::describe(&score))?;

    let classes: BTreeSet<CharacterClass> = password.chars().map(CharacterClass::of).collect();
    let names: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
    if !names.is_empty() {
        writeln!(out, "Character classes: {}", names.join(", "))?;
    }

    if check_confusion {
        let confusing = strength::confusing_chars(password);
        if !confusing.is_empty() {
            writeln!(out, "Potentially confusing characters: {:?}", confusing)?;
        } else {
            writeln!(out, "No confusing characters detected")?;
        }
    }
    Ok(())
}
