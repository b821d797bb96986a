//! Light/dark palettes for chart styling. The core stays terminal-agnostic:
//! colors are plain RGB triples, converted by the viewer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub grid: Rgb,
    pub text: Rgb,
    entries: &'static [(&'static str, Rgb)],
    fallback: Rgb,
}

impl Palette {
    pub fn metric(&self, name: &str) -> Rgb {
        self.entries
            .iter()
            .find(|(metric, _)| *metric == name)
            .map(|&(_, color)| color)
            .unwrap_or(self.fallback)
    }

    /// Dim variant used for percentile-band envelopes.
    pub fn band(&self, name: &str) -> Rgb {
        let Rgb(r, g, b) = self.metric(name);
        Rgb(r / 2, g / 2, b / 2)
    }
}

static LIGHT: Palette = Palette {
    grid: Rgb(0xe5, 0xe7, 0xeb),
    text: Rgb(0x37, 0x41, 0x51),
    fallback: Rgb(0x6b, 0x72, 0x80),
    entries: &[
        ("lux", Rgb(0xf5, 0x9e, 0x0b)),
        ("sun_elevation", Rgb(0xea, 0xb3, 0x08)),
        ("brightness_mean", Rgb(0x3b, 0x82, 0xf6)),
        ("brightness_p5", Rgb(0x3b, 0x82, 0xf6)),
        ("brightness_p95", Rgb(0x3b, 0x82, 0xf6)),
        ("exposure_time_us", Rgb(0x22, 0xc5, 0x5e)),
        ("analogue_gain", Rgb(0xef, 0x44, 0x44)),
        ("weather_temperature", Rgb(0xef, 0x44, 0x44)),
        ("weather_humidity", Rgb(0x3b, 0x82, 0xf6)),
        ("weather_wind_speed", Rgb(0x22, 0xc5, 0x5e)),
        ("system_cpu_temp", Rgb(0xf9, 0x73, 0x16)),
        ("system_load_1min", Rgb(0xa8, 0x55, 0xf7)),
    ],
};

static DARK: Palette = Palette {
    grid: Rgb(0x37, 0x41, 0x51),
    text: Rgb(0x9c, 0xa3, 0xaf),
    fallback: Rgb(0x9c, 0xa3, 0xaf),
    entries: &[
        ("lux", Rgb(0xfb, 0xbf, 0x24)),
        ("sun_elevation", Rgb(0xfa, 0xcc, 0x15)),
        ("brightness_mean", Rgb(0x60, 0xa5, 0xfa)),
        ("brightness_p5", Rgb(0x60, 0xa5, 0xfa)),
        ("brightness_p95", Rgb(0x60, 0xa5, 0xfa)),
        ("exposure_time_us", Rgb(0x4a, 0xde, 0x80)),
        ("analogue_gain", Rgb(0xf8, 0x71, 0x71)),
        ("weather_temperature", Rgb(0xf8, 0x71, 0x71)),
        ("weather_humidity", Rgb(0x60, 0xa5, 0xfa)),
        ("weather_wind_speed", Rgb(0x4a, 0xde, 0x80)),
        ("system_cpu_temp", Rgb(0xfb, 0x92, 0x3c)),
        ("system_load_1min", Rgb(0xc0, 0x84, 0xfc)),
    ],
};
