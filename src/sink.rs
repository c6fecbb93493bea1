//! Sample destinations.
//!
//! The synthesizer pushes finished samples one at a time into a
//! [`SampleSink`]. Anything that wants the audio — a playback buffer, a file
//! encoder, a test probe — implements the single `write` method.

/// Destination capability for produced samples.
///
/// Implementations must accept every sample handed to them; the synthesis
/// path is infallible, so a sink that can fail internally (like a file
/// encoder) records its error and reports it out of band.
pub trait SampleSink {
    /// Consumes one finished sample in [-1, 1].
    fn write(&mut self, sample: f64);
}

/// A growable playback buffer.
impl SampleSink for Vec<f64> {
    fn write(&mut self, sample: f64) {
        self.push(sample);
    }
}

impl<S: SampleSink + ?Sized> SampleSink for &mut S {
    fn write(&mut self, sample: f64) {
        (**self).write(sample);
    }
}

#[cfg(feature = "wav-export")]
mod wav {
    use std::io::{Seek, Write};
    use std::path::Path;

    use hound::{SampleFormat, WavSpec, WavWriter};

    use super::SampleSink;
    use crate::SAMPLE_RATE;

    /// A [`SampleSink`] that encodes samples to a mono 16-bit WAV stream.
    ///
    /// `write` never fails from the synthesizer's point of view; the first
    /// encoder error is stored and surfaced by [`finalize`], and all
    /// subsequent samples are dropped.
    ///
    /// [`finalize`]: WavSink::finalize
    pub struct WavSink<W: Write + Seek> {
        writer: WavWriter<W>,
        error: Option<hound::Error>,
    }

    impl WavSink<std::io::BufWriter<std::fs::File>> {
        /// Creates a WAV file at `path` and a sink writing into it.
        pub fn create<P: AsRef<Path>>(path: P) -> hound::Result<Self> {
            Ok(Self {
                writer: WavWriter::create(path, Self::spec())?,
                error: None,
            })
        }
    }

    impl<W: Write + Seek> WavSink<W> {
        /// Wraps an arbitrary seekable writer.
        pub fn new(writer: W) -> hound::Result<Self> {
            Ok(Self {
                writer: WavWriter::new(writer, Self::spec())?,
                error: None,
            })
        }

        fn spec() -> WavSpec {
            WavSpec {
                channels: 1,
                sample_rate: SAMPLE_RATE,
                bits_per_sample: 16,
                sample_format: SampleFormat::Int,
            }
        }

        /// Finishes the WAV stream, returning the first error encountered
        /// while writing, if any.
        pub fn finalize(mut self) -> hound::Result<()> {
            if let Some(err) = self.error.take() {
                return Err(err);
            }
            self.writer.finalize()
        }
    }

    impl<W: Write + Seek> SampleSink for WavSink<W> {
        fn write(&mut self, sample: f64) {
            if self.error.is_some() {
                return;
            }
            let value = (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16;
            if let Err(err) = self.writer.write_sample(value) {
                self.error = Some(err);
            }
        }
    }
}

#[cfg(feature = "wav-export")]
pub use wav::WavSink;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_accumulates() {
        let mut sink: Vec<f64> = Vec::new();
        sink.write(0.5);
        sink.write(-0.25);
        assert_eq!(sink, vec![0.5, -0.25]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut sink: Vec<f64> = Vec::new();
        {
            let mut by_ref = &mut sink;
            by_ref.write(1.0);
        }
        assert_eq!(sink, vec![1.0]);
    }

    #[cfg(feature = "wav-export")]
    mod wav {
        use std::io::Cursor;

        use super::super::{SampleSink, WavSink};

        #[test]
        fn test_wav_sink_writes_samples() {
            let mut sink = WavSink::new(Cursor::new(Vec::new())).unwrap();
            for i in 0..100 {
                sink.write(f64::from(i) / 100.0);
            }
            sink.finalize().unwrap();
        }

        #[test]
        fn test_wav_sink_round_trip_header() {
            let mut buffer = Cursor::new(Vec::new());
            {
                let mut sink = WavSink::new(&mut buffer).unwrap();
                for _ in 0..441 {
                    sink.write(0.0);
                }
                sink.finalize().unwrap();
            }
            buffer.set_position(0);
            let reader = hound::WavReader::new(buffer).unwrap();
            let spec = reader.spec();
            assert_eq!(spec.channels, 1);
            assert_eq!(spec.sample_rate, crate::SAMPLE_RATE);
            assert_eq!(spec.bits_per_sample, 16);
            assert_eq!(reader.len(), 441);
        }

        #[test]
        fn test_wav_sink_clamps_out_of_range() {
            let mut buffer = Cursor::new(Vec::new());
            {
                let mut sink = WavSink::new(&mut buffer).unwrap();
                sink.write(2.0);
                sink.write(-2.0);
                sink.finalize().unwrap();
            }
            buffer.set_position(0);
            let mut reader = hound::WavReader::new(buffer).unwrap();
            let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
            assert_eq!(samples, vec![i16::MAX, -i16::MAX]);
        }
    }
}
