//! Wi-Fi, Bluetooth and connectivity.

use ir_protocol::Category;

use super::{Action, CategoryHandler};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkHandler;

fn per_platform(
    platform: Platform,
    linux: &[&str],
    macos: &[&str],
    windows: &[&str],
    done: &str,
    failed: &str,
) -> Action {
    let argv = match platform {
        Platform::Linux => linux,
        Platform::Macos => macos,
        Platform::Windows => windows,
    };
    Action::run(argv, done, failed)
}

impl CategoryHandler for NetworkHandler {
    fn category(&self) -> Category {
        Category::Network
    }

    fn plan(&self, command: &str, platform: Platform) -> Option<Action> {
        let action = match command.trim().to_lowercase().as_str() {
            "wifi on" => per_platform(
                platform,
                &["nmcli", "radio", "wifi", "on"],
                &["networksetup", "-setairportpower", "en0", "on"],
                &["netsh", "interface", "set", "interface", "Wi-Fi", "enabled"],
                "WiFi turned on",
                "Failed to turn on WiFi. Make sure you have the required permissions.",
            ),
            "wifi off" => per_platform(
                platform,
                &["nmcli", "radio", "wifi", "off"],
                &["networksetup", "-setairportpower", "en0", "off"],
                &["netsh", "interface", "set", "interface", "Wi-Fi", "disabled"],
                "WiFi turned off",
                "Failed to turn off WiFi. Make sure you have the required permissions.",
            ),
            "connect wifi" | "show wifi networks" => Action::query(
                match platform {
                    Platform::Linux => &["nmcli", "device", "wifi", "list"],
                    Platform::Macos => &["networksetup", "-listpreferredwirelessnetworks", "en0"],
                    Platform::Windows => &["netsh", "wlan", "show", "networks"],
                },
                "Showing available WiFi networks. Please select a network to connect.",
                "Failed to show WiFi networks. Make sure WiFi is enabled.",
            ),
            "disconnect wifi" => per_platform(
                platform,
                &["nmcli", "device", "disconnect", "wifi"],
                &["networksetup", "-setairportpower", "en0", "off"],
                &["netsh", "wlan", "disconnect"],
                "Disconnected from WiFi",
                "Failed to disconnect from WiFi.",
            ),
            "bluetooth on" => per_platform(
                platform,
                &["bluetoothctl", "power", "on"],
                &["blueutil", "-p", "1"],
                &["powershell", "-Command", "Set-BluetoothStatus -BluetoothStatus On"],
                "Bluetooth turned on",
                "Failed to turn on Bluetooth. Make sure you have the required permissions.",
            ),
            "bluetooth off" => per_platform(
                platform,
                &["bluetoothctl", "power", "off"],
                &["blueutil", "-p", "0"],
                &["powershell", "-Command", "Set-BluetoothStatus -BluetoothStatus Off"],
                "Bluetooth turned off",
                "Failed to turn off Bluetooth. Make sure you have the required permissions.",
            ),
            "airplane mode" => match platform {
                Platform::Linux => Action::run(
                    &["nmcli", "radio", "all", "off"],
                    "Airplane mode enabled",
                    "Failed to toggle airplane mode.",
                ),
                _ => Action::ack("Toggling airplane mode..."),
            },
            "check internet" => Action::run(
                match platform {
                    Platform::Windows => &["ping", "-n", "1", "8.8.8.8"],
                    _ => &["ping", "-c", "1", "8.8.8.8"],
                },
                "Internet connection is working",
                "No internet connection",
            ),
            "network status" => Action::query(
                match platform {
                    Platform::Linux => &["nmcli", "general", "status"],
                    Platform::Macos => &["networksetup", "-getinfo", "Wi-Fi"],
                    Platform::Windows => &["netsh", "interface", "show", "interface"],
                },
                "Network status:",
                "Failed to get network status.",
            ),
            _ => return None,
        };
        Some(action)
    }
}
