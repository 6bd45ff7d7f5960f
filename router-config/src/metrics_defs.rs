//! Metrics emitted while resolving the router section.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Histogram,
}

impl MetricType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricType::Counter => "Counter",
            MetricType::Histogram => "Histogram",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub description: &'static str,
}

pub const SOURCE_RESOLVED: MetricDef = MetricDef {
    name: "router_config.resolve",
    metric_type: MetricType::Counter,
    description: "Configuration sources resolved to bytes. Tagged with genre, result.",
};

pub const SOURCE_BYTES: MetricDef = MetricDef {
    name: "router_config.bytes",
    metric_type: MetricType::Histogram,
    description: "Size in bytes of a resolved configuration source. Tagged with genre.",
};

pub const CHAIN_DELIVERY: MetricDef = MetricDef {
    name: "router_config.delivery",
    metric_type: MetricType::Counter,
    description: "Virtual service and destination rule pairs handed to the router chain",
};

pub const ALL_METRICS: &[MetricDef] = &[SOURCE_RESOLVED, SOURCE_BYTES, CHAIN_DELIVERY];

#[macro_export]
macro_rules! counter {
    ($def:expr $(, $key:expr => $value:expr)* $(,)?) => {
        metrics::counter!($def.name $(, $key => $value)*)
    };
}

#[macro_export]
macro_rules! histogram {
    ($def:expr $(, $key:expr => $value:expr)* $(,)?) => {
        metrics::histogram!($def.name $(, $key => $value)*)
    };
}
