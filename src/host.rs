use serde::Serialize;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// A logical CPU as reported by the operating system.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CpuInfo {
    pub name: String,
    pub brand: String,
    pub vendor_id: String,
    /// Frequency in MHz.
    pub frequency: u64,
}

/// Live process and host facts.
///
/// Every call is a fresh query, nothing is cached between calls.
pub trait HostProbe {
    fn pid(&self) -> u32;
    fn cpus(&self) -> Vec<CpuInfo>;
    fn hostname(&self) -> Option<String>;
}

/// A `HostProbe` backed by the running operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostProbe;

impl HostProbe for SystemHostProbe {
    fn pid(&self) -> u32 {
        std::process::id()
    }

    fn cpus(&self) -> Vec<CpuInfo> {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::new().with_frequency())
        );
        sys.cpus()
            .iter()
            .map(|cpu| CpuInfo {
                name: cpu.name().to_string(),
                brand: cpu.brand().to_string(),
                vendor_id: cpu.vendor_id().to_string(),
                frequency: cpu.frequency(),
            })
            .collect()
    }

    fn hostname(&self) -> Option<String> {
        System::host_name()
    }
}
