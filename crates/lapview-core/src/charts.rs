//! The fixed dashboard catalogue: five charts, each naming the metrics it
//! fetches in one request and how its axes are drawn.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Light,
    Brightness,
    Exposure,
    Weather,
    System,
}

impl ChartId {
    pub fn slug(&self) -> &'static str {
        match self {
            ChartId::Light => "light",
            ChartId::Brightness => "brightness",
            ChartId::Exposure => "exposure",
            ChartId::Weather => "weather",
            ChartId::System => "system",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YScale {
    Linear,
    Log10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct AxisDef {
    pub title: &'static str,
    pub scale: YScale,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisDef {
    const fn linear(title: &'static str) -> Self {
        Self {
            title,
            scale: YScale::Linear,
            min: None,
            max: None,
        }
    }

    const fn log10(title: &'static str, min: f64) -> Self {
        Self {
            title,
            scale: YScale::Log10,
            min: Some(min),
            max: None,
        }
    }

    const fn bounded(title: &'static str, min: f64, max: f64) -> Self {
        Self {
            title,
            scale: YScale::Linear,
            min: Some(min),
            max: Some(max),
        }
    }

    const fn from_zero(title: &'static str) -> Self {
        Self {
            title,
            scale: YScale::Linear,
            min: Some(0.0),
            max: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub metric: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub axis: AxisSide,
    /// Percentile-band envelope series, drawn dimmer than the main line.
    pub band: bool,
}

impl MetricDef {
    const fn left(metric: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self {
            metric,
            label,
            unit,
            axis: AxisSide::Left,
            band: false,
        }
    }

    const fn right(metric: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self {
            metric,
            label,
            unit,
            axis: AxisSide::Right,
            band: false,
        }
    }

    const fn band(metric: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self {
            metric,
            label,
            unit,
            axis: AxisSide::Left,
            band: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChartDef {
    pub id: ChartId,
    pub title: &'static str,
    pub metrics: &'static [MetricDef],
    pub left: AxisDef,
    pub right: Option<AxisDef>,
}

impl ChartDef {
    pub fn metric_names(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.metric).collect()
    }
}

pub static DASHBOARD_CHARTS: [ChartDef; 5] = [
    ChartDef {
        id: ChartId::Light,
        title: "Light Levels",
        metrics: &[
            MetricDef::left("lux", "Lux", "lx"),
            MetricDef::right("sun_elevation", "Sun Elev", "deg"),
        ],
        left: AxisDef::log10("Lux", 0.01),
        right: Some(AxisDef::linear("Sun Elev (deg)")),
    },
    ChartDef {
        id: ChartId::Brightness,
        title: "Brightness",
        metrics: &[
            MetricDef::band("brightness_p95", "P95", ""),
            MetricDef::band("brightness_p5", "P5", ""),
            MetricDef::left("brightness_mean", "Mean", ""),
        ],
        left: AxisDef::bounded("Brightness", 0.0, 255.0),
        right: None,
    },
    ChartDef {
        id: ChartId::Exposure,
        title: "Exposure & Gain",
        metrics: &[
            MetricDef::left("exposure_time_us", "Exposure", "us"),
            MetricDef::right("analogue_gain", "Gain", "x"),
        ],
        left: AxisDef::log10("Exposure (us)", 1.0),
        right: Some(AxisDef::linear("Gain")),
    },
    ChartDef {
        id: ChartId::Weather,
        title: "Weather",
        metrics: &[
            MetricDef::left("weather_temperature", "Temperature", "C"),
            MetricDef::right("weather_humidity", "Humidity", "%"),
            MetricDef::right("weather_wind_speed", "Wind", "m/s"),
        ],
        left: AxisDef::linear("Temp (C)"),
        right: Some(AxisDef::from_zero("Humidity (%) / Wind (m/s)")),
    },
    ChartDef {
        id: ChartId::System,
        title: "System Metrics",
        metrics: &[
            MetricDef::left("system_cpu_temp", "CPU Temp", "C"),
            MetricDef::right("system_load_1min", "Load (1min)", ""),
        ],
        left: AxisDef::linear("CPU Temp (C)"),
        right: Some(AxisDef::from_zero("Load")),
    },
];
