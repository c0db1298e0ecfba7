pub mod sns_envelope;
