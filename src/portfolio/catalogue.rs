//! Static project catalogue.

use serde::Serialize;

/// A portfolio entry as served by the projects route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project name.
    pub title: &'static str,
    /// Short discipline summary shown under the title.
    pub subtitle: &'static str,
    /// One or two sentence write-up.
    pub description: &'static str,
    /// Tools and technologies used, in display order.
    pub tech: &'static [&'static str],
    /// Repository or write-up URL.
    pub link: &'static str,
}

const FEATURED: [Project; 3] = [
    Project {
        title: "Autonomous Line-Following Robot",
        subtitle: "Embedded Systems, Control",
        description: "Designed and built a PID-controlled robot using STM32 and IR sensor array. \
                      Achieved robust tracking at 1.2 m/s.",
        tech: &["C", "STM32", "PID", "KiCad"],
        link: "https://github.com/your-username/line-following-robot",
    },
    Project {
        title: "IoT Air Quality Monitor",
        subtitle: "IoT, Cloud, Data Viz",
        description: "End-to-end sensor device with ESP32 publishing to MQTT, backend \
                      aggregation, and a React dashboard for trends.",
        tech: &["ESP32", "MQTT", "FastAPI", "React"],
        link: "https://github.com/your-username/aqi-monitor",
    },
    Project {
        title: "Finite Element Beam Solver",
        subtitle: "Numerical Methods",
        description: "Implemented a 2D beam FE solver with visualization for deflection and \
                      stress, validated against textbook problems.",
        tech: &["Python", "NumPy", "Matplotlib"],
        link: "https://github.com/your-username/fe-beam",
    },
];

/// Returns the featured projects in display order.
#[must_use]
pub const fn featured_projects() -> &'static [Project] {
    &FEATURED
}
