use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor, TextStyle};

/// tab10 blue/orange
pub const MEXICO_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
pub const ARGENTINA_COLOR: RGBColor = RGBColor(0xff, 0x7f, 0x0e);

/// A shaded historical era drawn behind the development panel.
pub struct EraBand {
    pub start: i32,
    pub end: i32,
    pub label: &'static str,
    pub color: RGBColor,
}

pub static ERA_BANDS: [EraBand; 3] = [
    EraBand {
        start: 1982,
        end: 1990,
        label: "Debt Crisis/\"Lost Decade\"",
        color: RGBColor(255, 0, 0),
    },
    EraBand {
        start: 1990,
        end: 2000,
        label: "Neoliberal Reforms (Menem/Salinas)",
        color: RGBColor(0, 128, 0),
    },
    EraBand {
        start: 2018,
        end: 2024,
        label: "Contemporary Populism (AMLO/Milei)",
        color: RGBColor(128, 0, 128),
    },
];

pub fn suptitle_font() -> TextStyle<'static> {
    TextStyle::from(FontDesc::new(FontFamily::SansSerif, 34.0, FontStyle::Bold))
}

pub fn panel_title_font() -> TextStyle<'static> {
    TextStyle::from(FontDesc::new(FontFamily::SansSerif, 22.0, FontStyle::Bold))
}
