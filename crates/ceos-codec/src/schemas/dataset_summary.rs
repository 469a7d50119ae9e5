//! Dataset summary record.
//!
//! Scene, ellipsoid, sensor, processing and Doppler parameters for a SAR
//! product. Layout per the CEOS SAR leader file format, record type code
//! `18-10-18-20`. Fields left as [`FieldKind::Blank`] are reserved or not
//! interpreted, and stay opaque.

use crate::error::Result;
use crate::schema::RecordSchema;
use crate::types::FieldKind;

use super::header::record_header;

/// Schema name of the dataset summary record.
pub const DATASET_SUMMARY: &str = "dataset summary";

/// Dataset summary fields following the 12-byte record header.
pub const DATASET_SUMMARY_FIELDS: &[(&str, FieldKind)] = &[
    ("DSRecordSequenceNumber", FieldKind::Integer(4)),
    ("SARChannelIndicator", FieldKind::String(4)),
    ("SceneIdentifier", FieldKind::String(32)),
    ("SceneDesignator", FieldKind::String(16)),
    ("InputSceneCenterTime", FieldKind::String(32)),
    ("blanks1", FieldKind::Blank(16)),
    ("SceneCenterLatitude", FieldKind::Blank(16)),
    ("SceneCenterLongitude", FieldKind::Blank(16)),
    ("SceneCenterHeading", FieldKind::Blank(16)),
    ("EllipsoidDesignator", FieldKind::String(16)),
    ("EllipsoidSemiMajorAxisInKm", FieldKind::Float(16)),
    ("EllipsoidSemiMinorAxisInKm", FieldKind::Float(16)),
    ("EarthMassIn1024Kg", FieldKind::Float(16)),
    ("GravitationalConstant", FieldKind::Float(16)),
    ("EllipsoidJ2Parameter", FieldKind::Float(16)),
    ("EllipsoidJ3Parameter", FieldKind::Float(16)),
    ("EllipsoidJ4Parameter", FieldKind::Float(16)),
    ("blanks2", FieldKind::Blank(16)),
    ("AverageTerrainHeight", FieldKind::Float(16)),
    ("SceneCenterLineNumber", FieldKind::Integer(8)),
    ("SceneCenterPixelNumber", FieldKind::Integer(8)),
    ("ProcessedSceneLengthInKm", FieldKind::Float(16)),
    ("ProcessedSceneWidthInKm", FieldKind::Float(16)),
    ("blanks3", FieldKind::Blank(16)),
    ("NumberOfSARChannels", FieldKind::Integer(4)),
    ("blanks4", FieldKind::Blank(4)),
    ("SensorPlatformMissionIdentifier", FieldKind::String(16)),
    ("SensorIDAndMode", FieldKind::String(32)),
    ("OrbitNumber", FieldKind::Integer(8)),
    ("SensorPlatformLatitude", FieldKind::Blank(8)),
    ("SensorPlatformLongitude", FieldKind::Blank(8)),
    ("SensorPlatformHeading", FieldKind::Blank(8)),
    ("SensorClockAngle", FieldKind::Float(8)),
    ("SceneCenterIncidenceAngle", FieldKind::Float(8)),
    ("blanks5", FieldKind::Blank(8)),
    ("RadarWavelengthInm", FieldKind::Float(16)),
    ("MotionCompensationIndicator", FieldKind::String(2)),
    ("RangePulseCodeSpecifier", FieldKind::String(16)),
    ("RangePulseAmplitudeCoefficientDCTerm", FieldKind::Float(16)),
    ("RangePulseAmplitudeCoefficientLinearTerm", FieldKind::Float(16)),
    ("RangePulseAmplitudeCoefficientQuadraticTerm", FieldKind::Float(16)),
    ("RangePulseAmplitudeCoefficientCubicTerm", FieldKind::Float(16)),
    ("RangePulseAmplitudeCoefficientQuarticTerm", FieldKind::Float(16)),
    ("RangePulsePhaseCoefficientDCTerm", FieldKind::Float(16)),
    ("RangePulsePhaseCoefficientLinearTerm", FieldKind::Float(16)),
    ("RangePulsePhaseCoefficientQuadraticTerm", FieldKind::Float(16)),
    ("RangePulsePhaseCoefficientCubicTerm", FieldKind::Float(16)),
    ("RangePulsePhaseCoefficientQuarticTerm", FieldKind::Float(16)),
    ("DownlinkedDataChirpExtractionIndex", FieldKind::Blank(8)),
    ("blanks6", FieldKind::Blank(8)),
    ("SamplingRateInMHz", FieldKind::Float(16)),
    ("RangeGateAtEarlyEdgeAtStartOfImageInusec", FieldKind::Float(16)),
    ("RangePulseLengthInusec", FieldKind::Float(16)),
    ("BasebandConversionFlag", FieldKind::String(4)),
    ("RangeCompressedFlag", FieldKind::String(4)),
    ("ReceiverGainCopolEarlyEdgeindB", FieldKind::Float(16)),
    ("ReceiverGainXpolEarlyEdgeindB", FieldKind::Float(16)),
    ("QuantizationBitsPerChannel", FieldKind::Integer(8)),
    ("QuantizationDescriptor", FieldKind::String(12)),
    ("DCBiasIComponent", FieldKind::Float(16)),
    ("DCBiasQComponent", FieldKind::Float(16)),
    ("GainImbalanceforIQ", FieldKind::Float(16)),
    ("blanks7", FieldKind::Blank(16)),
    ("blanks8", FieldKind::Blank(16)),
    ("AntennaElectronicBoresightInDeg", FieldKind::Float(16)),
    ("AntennaMechanicalBoresightInDeg", FieldKind::Float(16)),
    ("EchoTrackerOnOffFlag", FieldKind::String(4)),
    ("NominalPRFInmHz", FieldKind::Float(16)),
    ("EffectiveTwoWayAntennaElevation3dBBeamwidthInDeg", FieldKind::Float(16)),
    ("EffectiveTwoWayAntennaAzimuth3dBBeamwidthInDeg", FieldKind::Float(16)),
    ("SatelliteEncodedBinaryTimeCode", FieldKind::Integer(16)),
    ("SatelliteClockTime", FieldKind::String(32)),
    ("SatelliteClockIncrementInnsec", FieldKind::Integer(16)),
    ("ProcessingFacilityIdentifier", FieldKind::String(16)),
    ("ProcessingSystemIdentifier", FieldKind::String(8)),
    ("ProcessingVersionIdentifier", FieldKind::String(8)),
    ("ProcessingFacilityProcessCode", FieldKind::String(16)),
    ("ProductLevelCode", FieldKind::String(16)),
    ("ProductTypeSpecifier", FieldKind::String(32)),
    ("ProcessingAlgorithmIdentifier", FieldKind::String(32)),
    ("NominalEffectiveAzimuthLooks", FieldKind::Float(16)),
    ("NominalEffectiveRangeLooks", FieldKind::Float(16)),
    ("BandwidthPerLookInAzimuthHz", FieldKind::Float(16)),
    ("BandwidthPerLookInRangeHz", FieldKind::Float(16)),
    ("TotalProcessorBandwidthInAzimuth", FieldKind::Float(16)),
    ("TotalProcessorBandwidthInRange", FieldKind::Float(16)),
    ("WeightingFunctionInAzimuth", FieldKind::String(32)),
    ("WeightingFunctionInRange", FieldKind::String(32)),
    ("DataInputSource", FieldKind::String(16)),
    ("Nominal3dBResolutionInGroundRangeInm", FieldKind::Float(16)),
    ("Nominal3dBResolutionInAzimuthInm", FieldKind::Float(16)),
    ("ConstantRadiometricParameterBias", FieldKind::Float(16)),
    ("LinearRadiometricParameterGain", FieldKind::Float(16)),
    ("AlongTrackDopplerConstantTermInHz", FieldKind::Float(16)),
    ("AlongTrackDopplerLinearTermInHzPerPixel", FieldKind::Float(16)),
    ("AlongTrackDopplerQuadraticTermInHzPerPixel2", FieldKind::Float(16)),
    ("blanks9", FieldKind::Blank(16)),
    ("CrossTrackDopplerConstantTermInHz", FieldKind::Float(16)),
    ("CrossTrackDopplerLinearTermInHzPerPixel", FieldKind::Float(16)),
    ("CrossTrackDopplerLinearTermInHzPerPixel2", FieldKind::Float(16)),
    ("TimeDirectionIndicatorAlongPixel", FieldKind::String(8)),
    ("TimeDirectionIndicatorAlongLine", FieldKind::String(8)),
    ("AlongTrackDopplerRateConstantTermInHzPerSec", FieldKind::Float(16)),
    ("AlongTrackDopplerRateLinearTermInHzPerSecPerPixel", FieldKind::Float(16)),
    ("AlongTrackDopplerRateQuadraticTermInHzPerSecPerPixel2", FieldKind::Float(16)),
    ("blanks10", FieldKind::Blank(16)),
    ("CrossTrackDopplerRateConstantTermInHzPerSec", FieldKind::Float(16)),
    ("CrossTrackDopplerRateLinearTermInHzPerSecPerPixel", FieldKind::Float(16)),
    ("CrossTrackDopplerRateQuadraticTermInHzPerSecPerPixel2", FieldKind::Float(16)),
    ("blanks11", FieldKind::Blank(16)),
    ("LineContentIndicator", FieldKind::String(8)),
    ("ClutterLockAppliedFlag", FieldKind::String(4)),
    ("AutoFocusingAppliedFlag", FieldKind::String(4)),
    ("LineSpacingInm", FieldKind::Float(16)),
    ("PixelSpacingInm", FieldKind::Float(16)),
    ("ProcessorRangeCompressionDesignator", FieldKind::String(16)),
    ("blanks12", FieldKind::Blank(16)),
    ("blanks13", FieldKind::Blank(16)),
];

/// Build the dataset summary schema: record header plus summary fields.
pub fn dataset_summary() -> Result<RecordSchema> {
    record_header()?.extend(DATASET_SUMMARY, DATASET_SUMMARY_FIELDS.iter().copied())
}
