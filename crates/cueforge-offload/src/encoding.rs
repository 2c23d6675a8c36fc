//! Mapping from MIME type and codec string to a compressed audio encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A compressed audio encoding the platform may decode in offload mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Mp3,
    AacLc,
    AacHeV1,
    AacHeV2,
    AacXhe,
    AacEld,
    AacErBsac,
    Ac3,
    #[serde(rename = "eac3")]
    EAc3,
    #[serde(rename = "eac3-joc")]
    EAc3Joc,
    Ac4,
    Dts,
    DtsHd,
    DtsUhdP2,
    TrueHd,
    Opus,
}

impl Encoding {
    /// Every known encoding.
    pub const ALL: [Encoding; 16] = [
        Encoding::Mp3,
        Encoding::AacLc,
        Encoding::AacHeV1,
        Encoding::AacHeV2,
        Encoding::AacXhe,
        Encoding::AacEld,
        Encoding::AacErBsac,
        Encoding::Ac3,
        Encoding::EAc3,
        Encoding::EAc3Joc,
        Encoding::Ac4,
        Encoding::Dts,
        Encoding::DtsHd,
        Encoding::DtsUhdP2,
        Encoding::TrueHd,
        Encoding::Opus,
    ];

    /// Config-file name of this encoding.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::AacLc => "aac-lc",
            Self::AacHeV1 => "aac-he-v1",
            Self::AacHeV2 => "aac-he-v2",
            Self::AacXhe => "aac-xhe",
            Self::AacEld => "aac-eld",
            Self::AacErBsac => "aac-er-bsac",
            Self::Ac3 => "ac3",
            Self::EAc3 => "eac3",
            Self::EAc3Joc => "eac3-joc",
            Self::Ac4 => "ac4",
            Self::Dts => "dts",
            Self::DtsHd => "dts-hd",
            Self::DtsUhdP2 => "dts-uhd-p2",
            Self::TrueHd => "true-hd",
            Self::Opus => "opus",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| Error::UnknownEncoding(s.to_string()))
    }
}

/// Resolve the encoding of an audio sample MIME type.
///
/// AAC needs the RFC 6381 `mp4a.40.N` codec string to pick a profile;
/// without it the encoding is unknown. Returns `None` for anything that is
/// not a recognised compressed format.
pub fn encoding_for(mime_type: &str, codecs: Option<&str>) -> Option<Encoding> {
    match mime_type.trim().to_ascii_lowercase().as_str() {
        "audio/mpeg" => Some(Encoding::Mp3),
        "audio/mp4a-latm" => codecs.and_then(aac_encoding),
        "audio/ac3" => Some(Encoding::Ac3),
        "audio/eac3" => {
            if codecs.is_some_and(|c| c.split(',').any(|c| c.trim() == "ec+3")) {
                Some(Encoding::EAc3Joc)
            } else {
                Some(Encoding::EAc3)
            }
        }
        "audio/eac3-joc" => Some(Encoding::EAc3Joc),
        "audio/ac4" => Some(Encoding::Ac4),
        "audio/vnd.dts" => Some(Encoding::Dts),
        "audio/vnd.dts.hd" => Some(Encoding::DtsHd),
        "audio/vnd.dts.uhd;profile=p2" => Some(Encoding::DtsUhdP2),
        "audio/true-hd" => Some(Encoding::TrueHd),
        "audio/opus" => Some(Encoding::Opus),
        _ => None,
    }
}

/// AAC profile from the first `mp4a.OTI.AOT` entry of a codecs string.
fn aac_encoding(codecs: &str) -> Option<Encoding> {
    let codec = codecs
        .split(',')
        .map(str::trim)
        .find(|c| c.starts_with("mp4a."))?;

    let parts: Vec<&str> = codec.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    u8::from_str_radix(parts[1], 16).ok()?;
    let audio_object_type: u8 = parts[2].parse().ok()?;

    match audio_object_type {
        2 => Some(Encoding::AacLc),
        5 => Some(Encoding::AacHeV1),
        29 => Some(Encoding::AacHeV2),
        42 => Some(Encoding::AacXhe),
        23 => Some(Encoding::AacEld),
        22 => Some(Encoding::AacErBsac),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_mime_types() {
        assert_eq!(encoding_for("audio/mpeg", None), Some(Encoding::Mp3));
        assert_eq!(encoding_for("audio/ac3", None), Some(Encoding::Ac3));
        assert_eq!(encoding_for("audio/eac3", None), Some(Encoding::EAc3));
        assert_eq!(encoding_for("audio/eac3-joc", None), Some(Encoding::EAc3Joc));
        assert_eq!(encoding_for("audio/true-hd", None), Some(Encoding::TrueHd));
        assert_eq!(encoding_for("AUDIO/OPUS", None), Some(Encoding::Opus));
        assert_eq!(encoding_for("video/avc", None), None);
        assert_eq!(encoding_for("audio/raw", None), None);
    }

    #[test]
    fn test_eac3_joc_from_codecs() {
        assert_eq!(encoding_for("audio/eac3", Some("ec+3")), Some(Encoding::EAc3Joc));
        assert_eq!(encoding_for("audio/eac3", Some("ec-3")), Some(Encoding::EAc3));
    }

    #[test]
    fn test_aac_profiles() {
        let aac = |codecs| encoding_for("audio/mp4a-latm", Some(codecs));
        assert_eq!(aac("mp4a.40.2"), Some(Encoding::AacLc));
        assert_eq!(aac("mp4a.40.5"), Some(Encoding::AacHeV1));
        assert_eq!(aac("mp4a.40.29"), Some(Encoding::AacHeV2));
        assert_eq!(aac("mp4a.40.42"), Some(Encoding::AacXhe));
        assert_eq!(aac("mp4a.40.23"), Some(Encoding::AacEld));
        assert_eq!(aac("avc1.64001f, mp4a.40.2"), Some(Encoding::AacLc));
        assert_eq!(aac("mp4a.40.99"), None);
        assert_eq!(aac("mp4a.zz.2"), None);
        assert_eq!(aac("mp4a.40"), None);
        assert_eq!(encoding_for("audio/mp4a-latm", None), None);
    }

    #[test]
    fn test_name_round_trip() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.name().parse::<Encoding>(), Ok(encoding));
            let json = serde_json::to_string(&encoding).unwrap();
            assert_eq!(json, format!("\"{}\"", encoding.name()));
        }
        assert_eq!(
            "flac".parse::<Encoding>(),
            Err(Error::UnknownEncoding("flac".to_string()))
        );
    }
}
