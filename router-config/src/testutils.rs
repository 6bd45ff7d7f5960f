use crate::chain::{RouterChain, RouterConfigBytes};
use crate::config::Property;
use parking_lot::Mutex;
use std::io::Write;

/// Chain that records every delivery it receives.
#[derive(Default)]
pub struct RecordingChain {
    calls: Mutex<Vec<RouterConfigBytes>>,
}

impl RecordingChain {
    pub fn calls(&self) -> Vec<RouterConfigBytes> {
        self.calls.lock().clone()
    }
}

impl RouterChain for RecordingChain {
    fn set_vs_and_dr_config_bytes(&self, virtual_service: Vec<u8>, destination_rule: Vec<u8>) {
        self.calls.lock().push(RouterConfigBytes {
            virtual_service,
            destination_rule,
        });
    }
}

pub fn write_tmp_file(s: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut tmp = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    write!(tmp, "{}", s).expect("write config");

    tmp
}

pub fn property_for(tmp: &tempfile::NamedTempFile, genre: &str) -> Property {
    Property::new(tmp.path().to_str().expect("utf-8 temp path"), genre)
}
