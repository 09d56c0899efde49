//! Hardware context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::section::{flag, PromptSection, SectionsBuilder};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareContext {
    pub system_info: Option<String>,
    pub architecture: Option<String>,
    pub cpu_info: Option<String>,
    pub microcode: Option<String>,
    pub gpu_info: Option<String>,
    pub memory_info: Option<String>,
    pub storage_info: Option<String>,
    pub network_info: Option<String>,
    pub audio_info: Option<String>,
    pub usb_devices: Vec<String>,
    pub pci_devices: Vec<String>,
    pub kernel_modules: Vec<String>,
    pub loaded_drivers: Vec<String>,
    pub missing_drivers: Vec<String>,
    pub hardware_issues: Vec<String>,
    pub power_management: Option<String>,
    pub thermal_info: Option<String>,
    pub bios_uefi: Option<String>,
    pub secure_boot: bool,
    pub firmware: Vec<String>,
    pub virtualization_info: Option<String>,
    pub hardware_config: BTreeMap<String, String>,
    pub optimization_goals: Vec<String>,
    pub compatibility_issues: Vec<String>,
    pub recommended_packages: Vec<String>,
    pub config_options: BTreeMap<String, String>,
}

impl HardwareContext {
    pub fn sections(&self) -> Vec<PromptSection> {
        SectionsBuilder::new()
            .facts(
                "System Overview",
                [
                    ("System", self.system_info.clone()),
                    ("Architecture", self.architecture.clone()),
                ],
            )
            .facts(
                "Processor",
                [
                    ("CPU", self.cpu_info.clone()),
                    ("Microcode", self.microcode.clone()),
                ],
            )
            .text("Graphics", self.gpu_info.as_deref())
            .text("Memory", self.memory_info.as_deref())
            .text("Storage", self.storage_info.as_deref())
            .facts(
                "Connectivity",
                [
                    ("Network", self.network_info.clone()),
                    ("Audio", self.audio_info.clone()),
                ],
            )
            .bullets("USB Devices", &self.usb_devices)
            .bullets("PCI Devices", &self.pci_devices)
            .inline("Kernel Modules", &self.kernel_modules)
            .inline("Loaded Drivers", &self.loaded_drivers)
            .bullets("Missing Drivers", &self.missing_drivers)
            .bullets("Hardware Issues", &self.hardware_issues)
            .facts(
                "Power and Thermal",
                [
                    ("Power Management", self.power_management.clone()),
                    ("Thermal", self.thermal_info.clone()),
                ],
            )
            .facts(
                "Firmware",
                [
                    ("BIOS/UEFI", self.bios_uefi.clone()),
                    ("Secure Boot", flag(self.secure_boot)),
                ],
            )
            .inline("Firmware Packages", &self.firmware)
            .text("Virtualization", self.virtualization_info.as_deref())
            .map("Current Hardware Configuration", &self.hardware_config)
            .inline("Optimization Goals", &self.optimization_goals)
            .bullets("Compatibility Issues", &self.compatibility_issues)
            .inline("Recommended Packages", &self.recommended_packages)
            .map("Suggested Configuration Options", &self.config_options)
            .build()
    }
}
