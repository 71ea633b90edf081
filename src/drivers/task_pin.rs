//! Core-pinned thread spawning for ESP32 dual-core.
//!
//! Wraps `esp_pthread_set_cfg()` so that `std::thread::spawn` creates a
//! FreeRTOS task pinned to a specific CPU core with explicit priority
//! and stack size. The config→spawn pair is thread-local and must not
//! be interleaved with other thread creation on the same thread. On
//! non-ESP targets, falls back to a plain named thread.

use crate::error::Error;

/// CPU core identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 0 (PRO_CPU) — protocol stacks.
    Pro = 0,
    /// Core 1 (APP_CPU) — application logic.
    App = 1,
}

/// Spawn a thread pinned to a core with explicit priority and stack.
///
/// `name` must be null-terminated (e.g. `"poll\0"`).
#[cfg(target_os = "espidf")]
pub fn spawn_on_core(
    core: Core,
    priority: u8,
    stack_kb: usize,
    name: &'static str,
    f: impl FnOnce() + Send + 'static,
) -> crate::Result<std::thread::JoinHandle<()>> {
    // SAFETY: esp_pthread_set_cfg stores thread-local config consumed by
    // the next pthread_create from this thread; no aliasing involved.
    unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = core as i32;
        cfg.prio = priority as i32;
        cfg.stack_size = (stack_kb * 1024) as i32;
        cfg.thread_name = name.as_ptr() as *const _;
        let rc = esp_idf_sys::esp_pthread_set_cfg(&cfg);
        if rc != esp_idf_sys::ESP_OK as i32 {
            log::error!("esp_pthread_set_cfg failed (rc={rc})");
            return Err(Error::TaskSpawn(name));
        }
    }

    let display_name = name.trim_end_matches('\0');
    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        display_name,
        core,
        priority,
        stack_kb
    );

    std::thread::Builder::new()
        .name(display_name.into())
        .spawn(f)
        .map_err(|_| Error::TaskSpawn(name))
}

/// Simulation fallback — ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_on_core(
    _core: Core,
    _priority: u8,
    stack_kb: usize,
    name: &'static str,
    f: impl FnOnce() + Send + 'static,
) -> crate::Result<std::thread::JoinHandle<()>> {
    let display_name = name.trim_end_matches('\0');
    log::info!("Spawning '{}' (sim, stack={}KB)", display_name, stack_kb);

    std::thread::Builder::new()
        .name(display_name.into())
        .stack_size(stack_kb * 1024)
        .spawn(f)
        .map_err(|_| Error::TaskSpawn(name))
}
