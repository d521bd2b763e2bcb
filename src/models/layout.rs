//! The firmware-side struct contract.
//!
//! Firmware includes `animation_format.h` and reads the generated tables
//! through `AnimationFrame` and `AnimationDescriptor`. Field order here is
//! the order of the C initializers the static-data emitter writes and the
//! order of the members in the support header, so both are rendered from
//! these definitions.

/// Support header the generated files include.
pub const FORMAT_HEADER: &str = "animation_format.h";

/// Storage qualifier placed on every generated table.
pub const STORAGE_QUALIFIER: &str = "PROGMEM";

/// One member of a firmware struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub c_type: &'static str,
    pub comment: &'static str,
}

/// A firmware struct: name plus members in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructLayout {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl StructLayout {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }
}

pub const ANIMATION_FRAME: StructLayout = StructLayout {
    name: "AnimationFrame",
    fields: &[
        Field {
            name: "duration_ms",
            c_type: "uint16_t",
            comment: "Duration of the frame in milliseconds",
        },
        Field {
            name: "bitmap_offset",
            c_type: "uint32_t",
            comment: "Offset into the bitmap array where this frame begins",
        },
    ],
};

pub const ANIMATION_DESCRIPTOR: StructLayout = StructLayout {
    name: "AnimationDescriptor",
    fields: &[
        Field {
            name: "width",
            c_type: "uint16_t",
            comment: "Width of the bitmap in pixels",
        },
        Field {
            name: "height",
            c_type: "uint16_t",
            comment: "Height of the bitmap in pixels",
        },
        Field {
            name: "frame_count",
            c_type: "uint16_t",
            comment: "Total number of frames in the animation",
        },
        Field {
            name: "bytes_per_frame",
            c_type: "uint16_t",
            comment: "Size of a single frame in bytes",
        },
        Field {
            name: "frames",
            c_type: "const AnimationFrame*",
            comment: "Pointer to frame metadata stored in PROGMEM",
        },
        Field {
            name: "bitmaps",
            c_type: "const uint8_t*",
            comment: "Pointer to packed bitmap data stored in PROGMEM",
        },
    ],
};

/// Largest value a `uint16_t` member can hold.
pub const U16_LIMIT: u64 = u16::MAX as u64;

/// Largest value a `uint32_t` member can hold.
pub const U32_LIMIT: u64 = u32::MAX as u64;
