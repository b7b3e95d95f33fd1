//! Shared test fixtures.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use boot_report::{HostProbe, HostSource, ReportConfig};
use first_boot::display::DisplayContext;
use first_boot::AppConfig;

/// Kernel release reported by [`DeviceHost`].
pub const OS_RELEASE: &str = "6.1.21-v8+";

/// Node name reported by [`DeviceHost`].
pub const HOST_NAME: &str = "corearm-dev";

/// OS identity of a reference device.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceHost;

impl HostSource for DeviceHost {
    fn os_name(&self) -> Option<String> {
        Some("Linux".to_string())
    }

    fn kernel_version(&self) -> Option<String> {
        Some(OS_RELEASE.to_string())
    }

    fn host_name(&self) -> Option<String> {
        Some(HOST_NAME.to_string())
    }
}

/// Build a proc tree with 2000MB total and 500MB free memory.
pub fn fake_proc(dir: &Path) -> io::Result<()> {
    fs::write(
        dir.join("meminfo"),
        "MemTotal:        2048000 kB\n\
         MemFree:          512000 kB\n\
         MemAvailable:    1024000 kB\n\
         Buffers:           32000 kB\n",
    )
}

/// Application config reading from `proc_root`.
pub fn config_for(proc_root: &Path) -> AppConfig {
    AppConfig {
        report: ReportConfig {
            proc_root: proc_root.to_path_buf(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Host reading memory from `proc_root` and OS facts from [`DeviceHost`].
pub fn device_host(proc_root: &Path) -> HostProbe {
    HostProbe::with_source(config_for(proc_root).report, DeviceHost)
}

/// Display context wired to [`device_host`].
pub fn device_context(proc_root: &Path) -> DisplayContext {
    DisplayContext {
        probe: device_host(proc_root),
        ..DisplayContext::new(config_for(proc_root))
    }
}

/// In-memory writer whose contents stay readable after it is moved.
#[derive(Clone, Default)]
pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
