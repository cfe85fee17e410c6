//! Continuous playback test: synthesize, optionally plot, play.

use crate::audio::write_wav;
use crate::config::RampConfig;
use crate::error::Result;
use crate::generation::synthesize;
use crate::playback::{AudioDeviceService, PlaybackDriver, PlaybackReport};
use crate::plot::PlottingService;
use crate::types::DeviceHandle;

/// Runs one test on an already resolved device.
///
/// Steps run in order on the calling thread: synthesis, plot (when
/// `config.plot` is set), WAV capture (when `config.wav_path` is set) and
/// blocking playback. A failed plot is logged and the test continues; every
/// other failure ends the run.
pub fn run_test<S, P>(
    service: &S,
    plotter: &P,
    device: &DeviceHandle,
    config: &RampConfig,
) -> Result<PlaybackReport>
where
    S: AudioDeviceService + ?Sized,
    P: PlottingService + ?Sized,
{
    let request = config.waveform_request()?;

    log::info!("=== CONTINUOUS PLAYBACK TEST ===");
    log::info!("Signal type: {}", request.shape());

    let buffer = synthesize(&request)?;

    if config.plot {
        if let Err(e) = plotter.plot(&buffer, request.amplitude()) {
            log::warn!("{}", e);
        }
    }

    if let Some(ref path) = config.wav_path {
        write_wav(&buffer, path)?;
    }

    let driver = PlaybackDriver::new(service).with_output_channel(config.output_channel);
    match driver.play(&buffer, device, request.sample_rate_hz()) {
        Ok(report) => {
            log::info!("Test completed successfully!");
            Ok(report)
        }
        Err(e) => {
            log::error!("Test failed!");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::{ErrorCode, RampError};
    use crate::playback::service::fake::FakeDeviceService;
    use crate::types::SampleBuffer;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingPlotter {
        plotted: RefCell<Vec<(usize, f64)>>,
        fail: bool,
    }

    impl PlottingService for RecordingPlotter {
        fn plot(&self, buffer: &SampleBuffer, amplitude: f64) -> Result<()> {
            if self.fail {
                return Err(RampError::plot_failed(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "closed",
                )));
            }
            self.plotted.borrow_mut().push((buffer.len(), amplitude));
            Ok(())
        }
    }

    fn config(ramp_type: &str) -> RampConfig {
        RampConfig {
            device: Some("0".to_string()),
            sample_rate: 1000,
            duration: 0.5,
            amplitude: 1.0,
            ramp_type: ramp_type.to_string(),
            ..RampConfig::default()
        }
    }

    #[test]
    fn plays_synthesized_signal() {
        let service = FakeDeviceService::with_devices(&[("Stereo", 0, 2)]);
        let plotter = RecordingPlotter::default();
        let device = service.devices[0].handle();

        let report = run_test(&service, &plotter, &device, &config("linear")).unwrap();
        assert_eq!(report.frames, 500);
        assert_eq!(report.channels, 2);
        assert!(plotter.plotted.borrow().is_empty());

        let calls = service.calls.borrow();
        assert_eq!(calls[0].sample_rate, 1000);
        assert_eq!(calls[0].frames.len(), 1000);
        assert_eq!(calls[0].frames[0], -32767);
        assert_eq!(calls[0].frames[999], 32767);
    }

    #[test]
    fn plots_before_playing_when_asked() {
        let service = FakeDeviceService::with_devices(&[("Stereo", 0, 2)]);
        let plotter = RecordingPlotter::default();
        let device = service.devices[0].handle();
        let config = RampConfig {
            plot: true,
            ..config("triangle")
        };

        run_test(&service, &plotter, &device, &config).unwrap();
        assert_eq!(*plotter.plotted.borrow(), vec![(500usize, 1.0)]);
    }

    #[test]
    fn plot_failure_does_not_stop_playback() {
        let service = FakeDeviceService::with_devices(&[("Stereo", 0, 2)]);
        let plotter = RecordingPlotter {
            fail: true,
            ..RecordingPlotter::default()
        };
        let device = service.devices[0].handle();
        let config = RampConfig {
            plot: true,
            ..config("linear")
        };

        assert!(run_test(&service, &plotter, &device, &config).is_ok());
        assert_eq!(service.calls.borrow().len(), 1);
    }

    #[test]
    fn writes_wav_capture() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("capture.wav");
        let service = FakeDeviceService::with_devices(&[("Stereo", 0, 2)]);
        let device = service.devices[0].handle();
        let config = RampConfig {
            wav_path: Some(path.clone()),
            ..config("exponential")
        };

        run_test(&service, &RecordingPlotter::default(), &device, &config).unwrap();
        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 500);
    }

    #[test]
    fn invalid_config_plays_nothing() {
        let service = FakeDeviceService::with_devices(&[("Stereo", 0, 2)]);
        let device = service.devices[0].handle();
        let config = RampConfig {
            amplitude: 2.0,
            ..config("linear")
        };

        let err = run_test(&service, &RecordingPlotter::default(), &device, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn playback_failure_is_reported() {
        let mut service = FakeDeviceService::with_devices(&[("Stereo", 0, 2)]);
        service.fail_playback = true;
        let device = service.devices[0].handle();

        let err = run_test(&service, &RecordingPlotter::default(), &device, &config("linear"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PlaybackFailure);
    }
}
