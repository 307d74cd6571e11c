use crate::host::{CpuInfo, HostProbe};

/// A `HostProbe` with fixed answers.
#[derive(Debug, Clone)]
pub struct FixedHostProbe {
    pid: u32,
    cpus: Vec<CpuInfo>,
    hostname: Option<String>,
}

impl FixedHostProbe {
    pub fn with_hostname(hostname: Option<&str>) -> Self {
        Self { hostname: hostname.map(str::to_string), ..Self::default() }
    }
}

impl Default for FixedHostProbe {
    fn default() -> Self {
        let cpus = (0..4)
            .map(|index| CpuInfo {
                name: format!("cpu{}", index),
                brand: String::from("Test CPU"),
                vendor_id: String::from("GenuineTest"),
                frequency: 2400,
            })
            .collect();
        Self { pid: 4242, cpus, hostname: Some(String::from("web-01")) }
    }
}

impl HostProbe for FixedHostProbe {
    fn pid(&self) -> u32 {
        self.pid
    }

    fn cpus(&self) -> Vec<CpuInfo> {
        self.cpus.clone()
    }

    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }
}
