//! C++ header generator

use std::fmt::Write as FmtWrite;

use crate::config::EncoderConfig;
use crate::error::Result;
use crate::render::RenderedTable;

/// Wrap the rendered arrays into the `audio.h` header the firmware includes
pub fn render_header(table: &RenderedTable, config: &EncoderConfig, pack: &str) -> Result<String> {
    let mut output = String::new();

    if let Some(license) = &config.license {
        writeln!(output, "/**")?;
        for line in license.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                writeln!(output, " *")?;
            } else {
                writeln!(output, " * {}", line)?;
            }
        }
        writeln!(output, " */")?;
        writeln!(output)?;
    }

    writeln!(output, "// GENERATED FILE - DO NOT EDIT")?;
    writeln!(output, "// Voice pack: {}", pack)?;
    writeln!(output, "// Clips: {}", config.names.join(", "))?;
    writeln!(output, "// Generator: tools/atis-encode")?;
    writeln!(output)?;

    writeln!(output, "#ifndef {}", config.include_guard)?;
    writeln!(output, "#define {}", config.include_guard)?;
    writeln!(output)?;

    write_array(&mut output, "unsigned int", &config.arrays.lengths, &table.lengths)?;
    write_array(&mut output, "unsigned int", &config.arrays.offsets, &table.offsets)?;
    write_array(&mut output, "unsigned char", &config.arrays.data, &table.data)?;

    writeln!(output, "#endif /* {} */", config.include_guard)?;

    Ok(output)
}

fn write_array(output: &mut String, ty: &str, name: &str, body: &str) -> std::fmt::Result {
    writeln!(output, "constexpr {} {}[] PROGMEM = {{", ty, name)?;
    writeln!(output, "{}", body)?;
    writeln!(output, "}};")?;
    writeln!(output)
}
