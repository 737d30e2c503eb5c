use std::path::PathBuf;

use crate::prelude::Value;

macro_rules! value_from_str {
    ($($target:ty => $label:literal),+ $(,)?) => {
        $(
            impl Value for $target {
                fn type_label() -> String {
                    $label.to_string()
                }

                fn from_token(token: &str) -> Option<Self> {
                    token.parse().ok()
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

value_from_str! {
    i8 => "signed 8 bit integer",
    i16 => "signed 16 bit integer",
    i32 => "signed 32 bit integer",
    i64 => "signed 64 bit integer",
    i128 => "signed 128 bit integer",
    isize => "signed pointer sized integer",
    u8 => "unsigned 8 bit integer",
    u16 => "unsigned 16 bit integer",
    u32 => "unsigned 32 bit integer",
    u64 => "unsigned 64 bit integer",
    u128 => "unsigned 128 bit integer",
    usize => "unsigned pointer sized integer",
    f32 => "32 bit floating point number",
    f64 => "64 bit floating point number",
    char => "character",
    String => "string",
}

impl Value for bool {
    fn type_label() -> String {
        "bool".to_string()
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Value for PathBuf {
    fn type_label() -> String {
        "path".to_string()
    }

    fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(PathBuf::from(token))
        }
    }

    fn render(&self) -> String {
        self.display().to_string()
    }
}
