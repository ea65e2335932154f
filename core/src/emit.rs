use alloc::{format, string::String};
use strum::IntoEnumIterator;

use crate::{size::SizeClass, table::SpriteTable};

/// Bytes per line in the generated data arrays.
const BYTES_PER_LINE: usize = 16;

/// Shared declarations every generated header includes as `sprite.h`.
pub const SPRITE_DECLARATIONS: &str = "\
#ifndef SPRITE_H
#define SPRITE_H

#include <stdint.h>
#include <stdbool.h>

typedef struct {
    uint8_t width;
    uint8_t height;
    const uint8_t *data; // row-major, 1bpp, MSB first, rows padded to byte boundary
} sprite_frame_t;

typedef enum {
    SPRITE_SMALL = 0,
    SPRITE_MEDIUM,
    SPRITE_LARGE,
    SPRITE_SIZE_COUNT
} sprite_size_t;

typedef struct {
    uint8_t num_frames;
    const sprite_frame_t *frames; // array of frames for animation
} sprite_anim_t;

typedef struct {
    const char *name;
    sprite_anim_t sizes[SPRITE_SIZE_COUNT];
} sprite_t;

#endif
";

pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub fn header_guard(name: &str) -> String {
    format!("SPRITE_{}_H", name.to_ascii_uppercase())
}

fn frame_symbol(name: &str, size: SizeClass, index: u32) -> String {
    format!("sprite_{name}_{}_{index}_data", size.ident())
}

fn frames_symbol(name: &str, size: SizeClass) -> String {
    format!("sprite_{name}_{}_frames", size.ident())
}

/// Renders the C header for `table`.
pub fn emit_header(table: &SpriteTable) -> String {
    let name = table.name();
    let guard = header_guard(name);
    let mut out = String::new();
    out.push_str(&format!("// Auto-generated from sprites/{name}/ -- do not edit by hand\n"));
    out.push_str(&format!("// Re-generate with: sprite2h sprites/{name}\n"));
    out.push_str(&format!("#ifndef {guard}\n"));
    out.push_str(&format!("#define {guard}\n\n"));
    out.push_str("#include \"sprite.h\"\n\n");

    for size in SizeClass::iter() {
        let frames = table.group(size);
        if frames.is_empty() {
            continue;
        }

        for frame in frames {
            out.push_str(&format!(
                "// {}: {}x{}\n",
                frame.source_name,
                frame.width(),
                frame.height()
            ));
            out.push_str(&format!(
                "static const uint8_t {}[] = {{\n",
                frame_symbol(name, size, frame.index)
            ));
            for chunk in frame.data().chunks(BYTES_PER_LINE) {
                out.push_str("    ");
                for (i, byte) in chunk.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&format!("0x{byte:02x}"));
                }
                out.push_str(",\n");
            }
            out.push_str("};\n\n");
        }

        out.push_str(&format!(
            "static const sprite_frame_t {}[] = {{\n",
            frames_symbol(name, size)
        ));
        for frame in frames {
            out.push_str(&format!(
                "    {{ {}, {}, {} }},\n",
                frame.width(),
                frame.height(),
                frame_symbol(name, size, frame.index)
            ));
        }
        out.push_str("};\n\n");
    }

    out.push_str(&format!("static const sprite_t sprite_{name} = {{\n"));
    out.push_str(&format!("    .name = \"{name}\",\n"));
    out.push_str("    .sizes = {\n");
    for size in SizeClass::iter() {
        let count = table.group(size).len();
        if count > 0 {
            out.push_str(&format!(
                "        [{}] = {{ {count}, {} }},\n",
                size.enumerant(),
                frames_symbol(name, size)
            ));
        } else {
            out.push_str(&format!("        [{}] = {{ 0, NULL }},\n", size.enumerant()));
        }
    }
    out.push_str("    },\n");
    out.push_str("};\n\n");
    out.push_str(&format!("#endif // {guard}\n"));
    out
}

#[rustfmt::skip]
#[cfg(test)]
mod test {
    use super::*;
    use crate::{pack::LumaBuffer, source::testing::MemorySource};

    #[test]
    fn identifiers() {
        assert!(is_c_identifier("sayuri"));
        assert!(is_c_identifier("_cat2"));
        assert!(is_c_identifier("Hangyodon"));
        assert!(!is_c_identifier("2cat"));
        assert!(!is_c_identifier("my sprite"));
        assert!(!is_c_identifier("djungelskög"));
        assert!(!is_c_identifier(""));
        assert_eq!(header_guard("sayuri"), "SPRITE_SAYURI_H");
    }

    #[test]
    fn single_small_frame() {
        let mut image = LumaBuffer::filled(9, 2, 0);
        image.set(0, 0, 255);
        image.set(8, 1, 255);
        let source = MemorySource::new().with("SMALL_1.bmp", image);
        let table = SpriteTable::load("sayuri", &source).unwrap();
        let expected = "\
// Auto-generated from sprites/sayuri/ -- do not edit by hand
// Re-generate with: sprite2h sprites/sayuri
#ifndef SPRITE_SAYURI_H
#define SPRITE_SAYURI_H

#include \"sprite.h\"

// SMALL_1.bmp: 9x2
static const uint8_t sprite_sayuri_small_1_data[] = {
    0x80, 0x00, 0x00, 0x80,
};

static const sprite_frame_t sprite_sayuri_small_frames[] = {
    { 9, 2, sprite_sayuri_small_1_data },
};

static const sprite_t sprite_sayuri = {
    .name = \"sayuri\",
    .sizes = {
        [SPRITE_SMALL] = { 1, sprite_sayuri_small_frames },
        [SPRITE_MEDIUM] = { 0, NULL },
        [SPRITE_LARGE] = { 0, NULL },
    },
};

#endif // SPRITE_SAYURI_H
";
        assert_eq!(emit_header(&table), expected);
    }

    #[test]
    fn medium_only_aggregate() {
        let source = MemorySource::new().with("MEDIUM_1.bmp", LumaBuffer::filled(8, 1, 255));
        let table = SpriteTable::load("cat", &source).unwrap();
        let header = emit_header(&table);
        assert!(header.contains("        [SPRITE_SMALL] = { 0, NULL },\n"));
        assert!(header.contains("        [SPRITE_MEDIUM] = { 1, sprite_cat_medium_frames },\n"));
        assert!(header.contains("        [SPRITE_LARGE] = { 0, NULL },\n"));
        assert!(!header.contains("sprite_cat_small_frames"));
        assert!(!header.contains("sprite_cat_large_frames"));
    }

    #[test]
    fn frames_follow_index_order() {
        let source = MemorySource::new()
            .with("LARGE_2.bmp", LumaBuffer::filled(8, 1, 0))
            .with("SMALL_2.bmp", LumaBuffer::filled(8, 1, 0))
            .with("SMALL_1.bmp", LumaBuffer::filled(8, 1, 255));
        let table = SpriteTable::load("cat", &source).unwrap();
        let header = emit_header(&table);
        let small_1 = header.find("    { 8, 1, sprite_cat_small_1_data },").unwrap();
        let small_2 = header.find("    { 8, 1, sprite_cat_small_2_data },").unwrap();
        let large_2 = header.find("static const uint8_t sprite_cat_large_2_data[]").unwrap();
        assert!(small_1 < small_2);
        assert!(small_2 < large_2);
    }

    #[test]
    fn long_data_wraps_every_sixteen_bytes() {
        // 32x5 is 20 bytes: one full line and one of four
        let source = MemorySource::new().with("SMALL_1.bmp", LumaBuffer::filled(32, 5, 255));
        let table = SpriteTable::load("cat", &source).unwrap();
        let header = emit_header(&table);
        let full = ["0xff"; 16].join(", ");
        let tail = ["0xff"; 4].join(", ");
        assert!(header.contains(&format!("{{\n    {full},\n    {tail},\n}};")));
    }

    #[test]
    fn output_is_stable() {
        let source = MemorySource::new()
            .with("SMALL_1.bmp", LumaBuffer::filled(12, 3, 200))
            .with("LARGE_1.bmp", LumaBuffer::filled(20, 20, 90));
        let first = emit_header(&SpriteTable::load("cat", &source).unwrap());
        let second = emit_header(&SpriteTable::load("cat", &source).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn declarations_define_shapes() {
        assert!(SPRITE_DECLARATIONS.contains("} sprite_frame_t;"));
        assert!(SPRITE_DECLARATIONS.contains("sprite_anim_t sizes[SPRITE_SIZE_COUNT];"));
        assert!(SPRITE_DECLARATIONS.ends_with("#endif\n"));
    }
}
