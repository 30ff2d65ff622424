// ── Transfer file codec ──
//
// Export creates the output file before fetching any ports. File handles
// are owned values and close on every return path, errors included.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CoreError;
use crate::model::TransferFile;

/// An opened, not yet written, transfer file.
pub struct TransferWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

/// Create (or truncate) the transfer file for writing.
pub fn open_for_write(path: &Path) -> Result<TransferWriter, CoreError> {
    let file = File::create(path).map_err(|source| CoreError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TransferWriter {
        path: path.to_path_buf(),
        out: BufWriter::new(file),
    })
}

impl TransferWriter {
    /// Serialize the document as a single compact JSON value and flush.
    pub fn write(mut self, transfer: &TransferFile) -> Result<(), CoreError> {
        let path = self.path;
        let fail = |source: std::io::Error| CoreError::FileWrite {
            path: path.clone(),
            source,
        };

        serde_json::to_writer(&mut self.out, transfer).map_err(|e| fail(e.into()))?;
        self.out.flush().map_err(fail)?;

        debug!(
            path = %path.display(),
            networks = transfer.networks.len(),
            ports = transfer.port_count(),
            "transfer file written"
        );
        Ok(())
    }
}

/// Open and parse a transfer file.
pub fn read_transfer_file(path: &Path) -> Result<TransferFile, CoreError> {
    let file = File::open(path).map_err(|source| CoreError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let transfer: TransferFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CoreError::FileParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        networks = transfer.networks.len(),
        ports = transfer.port_count(),
        "transfer file read"
    );
    Ok(transfer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{DevicePorts, NetworkPorts, SwitchPort};

    fn sample() -> TransferFile {
        let port = |id: &str, vlan: u32| -> SwitchPort {
            serde_json::from_value(json!({
                "portId": id,
                "name": format!("port {id}"),
                "tags": ["floor-2"],
                "enabled": true,
                "poeEnabled": false,
                "type": "access",
                "vlan": vlan,
                "voiceVlan": 20,
                "allowedVlans": "all",
                "isolationEnabled": false,
                "rstpEnabled": true,
                "stpGuard": "bpdu guard",
                "accessPolicyType": "Custom access policy",
                "accessPolicyNumber": 2,
                "linkNegotiation": "Auto negotiate"
            }))
            .unwrap()
        };

        TransferFile {
            networks: vec![
                NetworkPorts {
                    network_name: "HQ".into(),
                    devices: vec![
                        DevicePorts {
                            serial: "Q2XX-0000-0002".into(),
                            ports: vec![port("2", 10), port("1", 11)],
                        },
                        DevicePorts {
                            serial: "Q2XX-0000-0001".into(),
                            ports: vec![port("1", 12)],
                        },
                    ],
                },
                NetworkPorts {
                    network_name: "Branch".into(),
                    devices: vec![DevicePorts {
                        serial: "Q2XX-0000-0003".into(),
                        ports: vec![port("48", 99)],
                    }],
                },
            ],
        }
    }

    #[test]
    fn write_then_read_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ports.json");
        let original = sample();

        open_for_write(&path).unwrap().write(&original).unwrap();
        let restored = read_transfer_file(&path).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn written_document_uses_transfer_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ports.json");
        open_for_write(&path).unwrap().write(&sample()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(raw[0]["network"], "HQ");
        assert_eq!(raw[0]["nwports"][0]["serial"], "Q2XX-0000-0002");
        assert_eq!(raw[0]["nwports"][0]["devports"][1]["portId"], "1");
        assert_eq!(raw[1]["nwports"][0]["devports"][0]["vlan"], 99);
    }

    #[test]
    fn unwritable_path_fails_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("ports.json");

        let err = open_for_write(&path).err().unwrap();
        assert!(matches!(err, CoreError::FileCreate { .. }), "{err:?}");
    }

    #[test]
    fn missing_input_fails_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transfer_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::FileOpen { .. }), "{err:?}");
    }

    #[test]
    fn malformed_input_fails_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ports.json");
        std::fs::write(&path, r#"[{"network": "HQ", "nwports": [{"serial": 5}]}]"#).unwrap();

        let err = read_transfer_file(&path).unwrap_err();
        assert!(matches!(err, CoreError::FileParse { .. }), "{err:?}");
        assert!(err.to_string().starts_with("Reading from file failed"));
    }

    #[test]
    fn port_without_enabled_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ports.json");
        let doc = json!([{
            "network": "HQ",
            "nwports": [{
                "serial": "Q2XX-0000-0001",
                "devports": [{
                    "portId": "1",
                    "type": "access",
                    "vlan": 10,
                    "accessPolicyType": "Open"
                }]
            }]
        }]);
        std::fs::write(&path, doc.to_string()).unwrap();

        let err = read_transfer_file(&path).unwrap_err();
        assert!(matches!(err, CoreError::FileParse { .. }), "{err:?}");
        assert!(err.to_string().contains("enabled"), "{err}");
    }
}
