use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::detection::domain::detection_source::DetectionSource;
use crate::quality::domain::quality_gate::QualityGate;
use crate::quality::domain::verdict::{Instruction, Verdict};
use crate::session::cadence_controller::CadenceController;
use crate::session::frame_source::{FrameSource, StreamInfo};
use crate::session::session_config::SessionConfig;
use crate::session::session_logger::SessionLogger;
use crate::shared::frame::Frame;

/// Verdict for one admitted sample, ready for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluatedSample {
    pub timestamp_ms: u64,
    pub verdict: Verdict,
    pub instruction: Instruction,
}

impl EvaluatedSample {
    pub fn new(timestamp: Duration, verdict: Verdict) -> Self {
        Self {
            timestamp_ms: timestamp.as_millis() as u64,
            verdict,
            instruction: verdict.instruction(),
        }
    }
}

/// What happened to one incoming frame.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Same stream position as the previous frame; detection was skipped.
    Duplicate,
    /// Detected, but arrived before the sampling interval elapsed.
    Discarded,
    Evaluated(EvaluatedSample),
    /// The cancel flag was set; the session has been stopped.
    Cancelled,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSummary {
    pub frames_seen: usize,
    pub duplicate_frames: usize,
    pub evaluations: usize,
    pub accepted: usize,
    pub last_verdict: Option<Verdict>,
}

impl SessionSummary {
    fn record(&mut self, outcome: &FrameOutcome) {
        match outcome {
            FrameOutcome::Cancelled => return,
            FrameOutcome::Duplicate => self.duplicate_frames += 1,
            FrameOutcome::Discarded => {}
            FrameOutcome::Evaluated(sample) => {
                self.evaluations += 1;
                if sample.verdict.is_accepted() {
                    self.accepted += 1;
                }
                self.last_verdict = Some(sample.verdict);
            }
        }
        self.frames_seen += 1;
    }
}

/// Per-session scratch state and the collaborators a frame passes through.
///
/// Kept apart from the frame source so a frame borrowed from the source's
/// iterator can be processed without aliasing the source.
struct SamplingContext {
    detector: Box<dyn DetectionSource>,
    gate: QualityGate,
    cadence: CadenceController,
    logger: Box<dyn SessionLogger>,
    last_frame_at: Option<Duration>,
    last_verdict: Option<Verdict>,
}

impl SamplingContext {
    /// Clears per-session state. The cadence baseline is taken from the
    /// first frame that arrives afterwards, whatever its clock reads.
    fn reset(&mut self) {
        self.last_frame_at = None;
        self.last_verdict = None;
        self.cadence.stop();
    }

    fn process_frame(
        &mut self,
        frame: &Frame,
    ) -> Result<FrameOutcome, Box<dyn std::error::Error>> {
        if self.last_frame_at == Some(frame.timestamp()) {
            log::trace!("Skipping repeated frame at {:?}", frame.timestamp());
            return Ok(FrameOutcome::Duplicate);
        }
        self.last_frame_at = Some(frame.timestamp());
        if !self.cadence.is_sampling() {
            self.cadence.start(frame.timestamp());
        }

        let detect_start = Instant::now();
        let detections = self.detector.detect(frame)?;
        self.logger
            .timing("detect", detect_start.elapsed().as_secs_f64() * 1000.0);

        if !self.cadence.admit(frame.timestamp()) {
            return Ok(FrameOutcome::Discarded);
        }

        let eval_start = Instant::now();
        let verdict = self.gate.evaluate(&detections, frame)?;
        self.logger
            .timing("evaluate", eval_start.elapsed().as_secs_f64() * 1000.0);
        self.logger.verdict(frame.timestamp(), &verdict);
        self.last_verdict = Some(verdict);

        Ok(FrameOutcome::Evaluated(EvaluatedSample::new(
            frame.timestamp(),
            verdict,
        )))
    }
}

/// One enrollment capture: a frame stream, its detector, and the gate
/// sampled at a fixed cadence.
///
/// The session owns the frame source for its whole lifetime. Whatever
/// starts the stream is guaranteed to stop it: `run` closes the source on
/// every exit path, and dropping an active session closes it too.
/// Sessions share no state, so several can run side by side.
pub struct CaptureSession {
    source: Box<dyn FrameSource>,
    context: SamplingContext,
    cancelled: Arc<AtomicBool>,
    active: bool,
}

impl CaptureSession {
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn DetectionSource>,
        config: &SessionConfig,
        logger: Box<dyn SessionLogger>,
    ) -> Self {
        Self {
            source,
            context: SamplingContext {
                detector,
                gate: QualityGate::new(config.thresholds),
                cadence: CadenceController::new(config.sampling_interval()),
                logger,
                last_frame_at: None,
                last_verdict: None,
            },
            cancelled: Arc::new(AtomicBool::new(false)),
            active: false,
        }
    }

    /// Flag that stops the session once set: `run` checks it before each
    /// frame, `process_frame` before evaluating.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Instruction to display right now.
    pub fn current_instruction(&self) -> Instruction {
        if !self.active {
            return Instruction::EnableCamera;
        }
        self.context
            .last_verdict
            .map_or(Instruction::EnableCamera, |v| v.instruction())
    }

    /// Opens the frame source and starts sampling from a fresh baseline.
    pub fn start(&mut self) -> Result<StreamInfo, Box<dyn std::error::Error>> {
        if self.active {
            return Err("capture session already started".into());
        }
        let info = self.source.open()?;
        self.active = true;
        self.context.reset();
        self.context.logger.info(&format!(
            "Capture session started ({}x{}, sampling every {}ms)",
            info.width,
            info.height,
            self.context.cadence.interval().as_millis()
        ));
        log::debug!("Gate thresholds: {:?}", self.context.gate.thresholds());
        Ok(info)
    }

    /// Stops sampling and releases the frame source. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.context.cadence.stop();
        self.source.close();
        self.active = false;
        self.context.logger.info("Capture session stopped");
        self.context.logger.summary();
    }

    /// Feeds one frame from an externally driven stream.
    ///
    /// Once the cancel flag is set the session is stopped and the frame is
    /// reported as [`FrameOutcome::Cancelled`].
    pub fn process_frame(
        &mut self,
        frame: &Frame,
    ) -> Result<FrameOutcome, Box<dyn std::error::Error>> {
        if !self.active {
            return Err("capture session is not started".into());
        }
        if self.cancelled.load(Ordering::Relaxed) {
            self.context.logger.info("Capture session cancelled");
            self.stop();
            return Ok(FrameOutcome::Cancelled);
        }
        self.context.process_frame(frame)
    }

    /// Runs the session until the stream ends, the callback returns `false`,
    /// or the cancel flag is set. The source is closed before returning,
    /// including when an error aborts the run.
    pub fn run<F>(&mut self, mut on_sample: F) -> Result<SessionSummary, Box<dyn std::error::Error>>
    where
        F: FnMut(&EvaluatedSample) -> bool,
    {
        self.start()?;
        let result = self.sample_frames(&mut on_sample);
        self.stop();
        result
    }

    fn sample_frames(
        &mut self,
        on_sample: &mut dyn FnMut(&EvaluatedSample) -> bool,
    ) -> Result<SessionSummary, Box<dyn std::error::Error>> {
        let mut summary = SessionSummary::default();

        for frame in self.source.frames() {
            if self.cancelled.load(Ordering::Relaxed) {
                self.context.logger.info("Capture session cancelled");
                break;
            }
            let frame = frame?;
            let outcome = self.context.process_frame(&frame)?;
            summary.record(&outcome);

            if let FrameOutcome::Evaluated(sample) = &outcome {
                if !on_sample(sample) {
                    break;
                }
            }
        }

        Ok(summary)
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detection::{Detection, Keypoint};
    use crate::quality::domain::verdict::RejectionReason;
    use crate::session::session_logger::NullSessionLogger;
    use crate::shared::bounding_box::BoundingBox;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    // --- Stubs ---

    #[derive(Default)]
    struct SourceProbe {
        opened: AtomicUsize,
        closed: AtomicUsize,
    }

    struct StubFrameSource {
        frames: Vec<Frame>,
        fail_at: Option<usize>,
        probe: Arc<SourceProbe>,
    }

    impl StubFrameSource {
        fn new(frames: Vec<Frame>) -> (Self, Arc<SourceProbe>) {
            let probe = Arc::new(SourceProbe::default());
            let source = Self {
                frames,
                fail_at: None,
                probe: Arc::clone(&probe),
            };
            (source, probe)
        }
    }

    impl FrameSource for StubFrameSource {
        fn open(&mut self) -> Result<StreamInfo, Box<dyn std::error::Error>> {
            self.probe.opened.fetch_add(1, Ordering::SeqCst);
            Ok(StreamInfo {
                width: 640,
                height: 480,
                total_frames: Some(self.frames.len()),
            })
        }

        fn frames(
            &mut self,
        ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
            let fail_at = self.fail_at;
            Box::new(self.frames.iter().enumerate().map(
                move |(i, f)| -> Result<Frame, Box<dyn std::error::Error>> {
                    if Some(i) == fail_at {
                        Err("camera disconnected".into())
                    } else {
                        Ok(f.clone())
                    }
                },
            ))
        }

        fn close(&mut self) {
            self.probe.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct StubDetector {
        detections: Vec<Detection>,
        calls: Arc<AtomicUsize>,
    }

    impl StubDetector {
        fn new(detections: Vec<Detection>) -> Self {
            Self {
                detections,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl DetectionSource for StubDetector {
        fn detect(&mut self, _frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.detections.clone())
        }
    }

    struct FailingDetector;

    impl DetectionSource for FailingDetector {
        fn detect(&mut self, _frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
            Err("inference failed".into())
        }
    }

    // --- Helpers ---

    fn frame_at(ms: u64) -> Frame {
        Frame::filled([120, 120, 120, 255], 640, 480, Duration::from_millis(ms)).unwrap()
    }

    /// Frames every `step` ms from 0 through `until` inclusive.
    fn frames_every(step: u64, until: u64) -> Vec<Frame> {
        (0..=until / step).map(|i| frame_at(i * step)).collect()
    }

    fn good_detection() -> Detection {
        Detection::new(
            BoundingBox::new(160.0, 120.0, 320.0, 240.0),
            vec![
                Keypoint::new(0.45, 0.45),
                Keypoint::new(0.55, 0.45),
                Keypoint::new(0.38, 0.55),
                Keypoint::new(0.62, 0.55),
            ],
            0.95,
        )
    }

    fn session(source: StubFrameSource, detector: Box<dyn DetectionSource>) -> CaptureSession {
        CaptureSession::new(
            Box::new(source),
            detector,
            &SessionConfig::default(),
            Box::new(NullSessionLogger),
        )
    }

    // --- Cadence ---

    #[test]
    fn test_three_second_stream_at_100ms_evaluates_three_times() {
        let (source, _) = StubFrameSource::new(frames_every(100, 3000));
        let mut s = session(source, Box::new(StubDetector::new(vec![good_detection()])));

        let mut samples = Vec::new();
        let summary = s
            .run(|sample| {
                samples.push(sample.clone());
                true
            })
            .unwrap();

        let times: Vec<u64> = samples.iter().map(|s| s.timestamp_ms).collect();
        assert_eq!(times, vec![1000, 2000, 3000]);
        assert!(samples.iter().all(|s| s.verdict == Verdict::Accepted));
        assert!(samples
            .iter()
            .all(|s| s.instruction == Instruction::ImageAccepted));
        assert_eq!(summary.frames_seen, 31);
        assert_eq!(summary.evaluations, 3);
        assert_eq!(summary.accepted, 3);
    }

    #[test]
    fn test_every_frame_is_detected_even_when_discarded() {
        let (source, _) = StubFrameSource::new(frames_every(100, 1000));
        let detector = StubDetector::new(vec![]);
        let calls = Arc::clone(&detector.calls);
        let mut s = session(source, Box::new(detector));

        let summary = s.run(|_| true).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 11);
        assert_eq!(summary.evaluations, 1);
        assert_eq!(
            summary.last_verdict,
            Some(Verdict::Rejected(RejectionReason::NoFace))
        );
    }

    #[test]
    fn test_repeated_timestamps_skip_detection() {
        let frames = vec![
            frame_at(0),
            frame_at(0),
            frame_at(1000),
            frame_at(1000),
            frame_at(2000),
        ];
        let (source, _) = StubFrameSource::new(frames);
        let detector = StubDetector::new(vec![good_detection()]);
        let calls = Arc::clone(&detector.calls);
        let mut s = session(source, Box::new(detector));

        let summary = s.run(|_| true).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(summary.duplicate_frames, 2);
        assert_eq!(summary.evaluations, 2);
    }

    // --- Resource release ---

    #[test]
    fn test_source_closed_after_normal_run() {
        let (source, probe) = StubFrameSource::new(frames_every(500, 2000));
        let mut s = session(source, Box::new(StubDetector::new(vec![])));

        s.run(|_| true).unwrap();

        assert_eq!(probe.opened.load(Ordering::SeqCst), 1);
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
        assert!(!s.is_active());
    }

    #[test]
    fn test_source_closed_when_detector_fails() {
        let (source, probe) = StubFrameSource::new(frames_every(500, 2000));
        let mut s = session(source, Box::new(FailingDetector));

        let err = s.run(|_| true).unwrap_err();

        assert_eq!(err.to_string(), "inference failed");
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
        assert!(!s.is_active());
    }

    #[test]
    fn test_source_closed_when_stream_fails() {
        let (mut source, probe) = StubFrameSource::new(frames_every(500, 2000));
        source.fail_at = Some(2);
        let mut s = session(source, Box::new(StubDetector::new(vec![])));

        let err = s.run(|_| true).unwrap_err();

        assert_eq!(err.to_string(), "camera disconnected");
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_source_closed_when_gate_rejects_input() {
        let malformed = Detection {
            keypoints: vec![Keypoint::new(0.5, 0.5)],
            ..good_detection()
        };
        let (source, probe) = StubFrameSource::new(frames_every(500, 2000));
        let mut s = session(source, Box::new(StubDetector::new(vec![malformed])));

        let err = s.run(|_| true).unwrap_err();

        assert!(err.to_string().contains("keypoints"));
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_closes_started_session() {
        let (source, probe) = StubFrameSource::new(vec![]);
        {
            let mut s = session(source, Box::new(StubDetector::new(vec![])));
            s.start().unwrap();
            assert!(s.is_active());
        }
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_after_stop_closes_once() {
        let (source, probe) = StubFrameSource::new(vec![]);
        {
            let mut s = session(source, Box::new(StubDetector::new(vec![])));
            s.start().unwrap();
            s.stop();
            s.stop();
        }
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
    }

    // --- Early termination ---

    #[test]
    fn test_callback_can_stop_session() {
        let (source, probe) = StubFrameSource::new(frames_every(100, 5000));
        let mut s = session(source, Box::new(StubDetector::new(vec![good_detection()])));

        let summary = s.run(|sample| !sample.verdict.is_accepted()).unwrap();

        assert_eq!(summary.evaluations, 1);
        assert_eq!(summary.frames_seen, 11);
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_flag_stops_before_next_frame() {
        let (source, probe) = StubFrameSource::new(frames_every(100, 5000));
        let mut s = session(source, Box::new(StubDetector::new(vec![])));
        let cancel = s.cancel_handle();

        let summary = s
            .run(|_| {
                cancel.store(true, Ordering::Relaxed);
                true
            })
            .unwrap();

        assert_eq!(summary.evaluations, 1);
        assert_eq!(summary.frames_seen, 11);
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancelled_before_run_processes_nothing() {
        let (source, probe) = StubFrameSource::new(frames_every(100, 1000));
        let mut s = session(source, Box::new(StubDetector::new(vec![])));
        s.cancel_handle().store(true, Ordering::Relaxed);

        let summary = s.run(|_| true).unwrap();

        assert_eq!(summary.frames_seen, 0);
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
    }

    // --- Push-driven use ---

    #[test]
    fn test_process_frame_requires_started_session() {
        let (source, _) = StubFrameSource::new(vec![]);
        let mut s = session(source, Box::new(StubDetector::new(vec![])));
        assert!(s.process_frame(&frame_at(0)).is_err());
    }

    #[test]
    fn test_current_instruction_follows_last_verdict() {
        let (source, _) = StubFrameSource::new(vec![]);
        let mut s = session(source, Box::new(StubDetector::new(vec![])));
        assert_eq!(s.current_instruction(), Instruction::EnableCamera);

        s.start().unwrap();
        assert_eq!(s.current_instruction(), Instruction::EnableCamera);

        assert_eq!(s.process_frame(&frame_at(0)).unwrap(), FrameOutcome::Discarded);
        assert_eq!(s.process_frame(&frame_at(500)).unwrap(), FrameOutcome::Discarded);
        let outcome = s.process_frame(&frame_at(1000)).unwrap();
        assert_eq!(
            outcome,
            FrameOutcome::Evaluated(EvaluatedSample::new(
                Duration::from_millis(1000),
                Verdict::Rejected(RejectionReason::NoFace)
            ))
        );
        assert_eq!(s.current_instruction(), Instruction::NoFaceDetected);

        s.stop();
        assert_eq!(s.current_instruction(), Instruction::EnableCamera);
    }

    #[test]
    fn test_baseline_is_first_frame_after_start() {
        let (source, _) = StubFrameSource::new(vec![]);
        let mut s = session(source, Box::new(StubDetector::new(vec![])));
        s.start().unwrap();

        assert_eq!(s.process_frame(&frame_at(5000)).unwrap(), FrameOutcome::Discarded);
        assert_eq!(s.process_frame(&frame_at(5900)).unwrap(), FrameOutcome::Discarded);
        assert!(matches!(
            s.process_frame(&frame_at(6000)).unwrap(),
            FrameOutcome::Evaluated(_)
        ));
    }

    #[test]
    fn test_restart_on_continuing_clock_waits_a_full_interval() {
        let (source, probe) = StubFrameSource::new(vec![]);
        let mut s = session(source, Box::new(StubDetector::new(vec![])));

        s.start().unwrap();
        assert_eq!(s.process_frame(&frame_at(0)).unwrap(), FrameOutcome::Discarded);
        assert!(matches!(
            s.process_frame(&frame_at(1000)).unwrap(),
            FrameOutcome::Evaluated(_)
        ));
        s.stop();

        s.start().unwrap();
        assert_eq!(s.process_frame(&frame_at(4000)).unwrap(), FrameOutcome::Discarded);
        assert_eq!(s.process_frame(&frame_at(4500)).unwrap(), FrameOutcome::Discarded);
        assert!(matches!(
            s.process_frame(&frame_at(5000)).unwrap(),
            FrameOutcome::Evaluated(_)
        ));
        assert_eq!(probe.opened.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_trace_starting_late_waits_a_full_interval() {
        let frames = (0..=20).map(|i| frame_at(5000 + i * 100)).collect();
        let (source, _) = StubFrameSource::new(frames);
        let mut s = session(source, Box::new(StubDetector::new(vec![])));

        let mut times = Vec::new();
        s.run(|sample| {
            times.push(sample.timestamp_ms);
            true
        })
        .unwrap();

        assert_eq!(times, vec![6000, 7000]);
    }

    #[test]
    fn test_cancel_stops_push_driven_session() {
        let (source, probe) = StubFrameSource::new(vec![]);
        let detector = StubDetector::new(vec![]);
        let calls = Arc::clone(&detector.calls);
        let mut s = session(source, Box::new(detector));
        s.start().unwrap();
        assert_eq!(s.process_frame(&frame_at(0)).unwrap(), FrameOutcome::Discarded);

        s.cancel_handle().store(true, Ordering::Relaxed);

        assert_eq!(s.process_frame(&frame_at(1000)).unwrap(), FrameOutcome::Cancelled);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!s.is_active());
        assert_eq!(probe.closed.load(Ordering::SeqCst), 1);
        assert!(s.process_frame(&frame_at(2000)).is_err());
    }

    #[test]
    fn test_double_start_is_an_error() {
        let (source, probe) = StubFrameSource::new(vec![]);
        let mut s = session(source, Box::new(StubDetector::new(vec![])));
        s.start().unwrap();
        assert!(s.start().is_err());
        assert_eq!(probe.opened.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sessions_do_not_share_cadence() {
        let (a_source, _) = StubFrameSource::new(vec![]);
        let (b_source, _) = StubFrameSource::new(vec![]);
        let mut a = session(a_source, Box::new(StubDetector::new(vec![])));
        let mut b = session(b_source, Box::new(StubDetector::new(vec![])));
        a.start().unwrap();
        b.start().unwrap();

        a.process_frame(&frame_at(0)).unwrap();
        b.process_frame(&frame_at(500)).unwrap();

        assert!(matches!(
            a.process_frame(&frame_at(1000)).unwrap(),
            FrameOutcome::Evaluated(_)
        ));
        assert_eq!(b.process_frame(&frame_at(1000)).unwrap(), FrameOutcome::Discarded);
        assert!(matches!(
            b.process_frame(&frame_at(1500)).unwrap(),
            FrameOutcome::Evaluated(_)
        ));
    }

    #[test]
    fn test_samples_serialize_with_instruction_ids() {
        let sample = EvaluatedSample::new(
            Duration::from_millis(2000),
            Verdict::Rejected(RejectionReason::TooDark),
        );
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp_ms":2000,"verdict":{"status":"rejected","reason":"too_dark"},"instruction":"move_to_light"}"#
        );
    }

    #[test]
    fn test_shared_recording_logger_sees_verdicts() {
        struct RecordingLogger(Arc<Mutex<Vec<Verdict>>>);
        impl SessionLogger for RecordingLogger {
            fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
            fn verdict(&mut self, _timestamp: Duration, verdict: &Verdict) {
                self.0.lock().unwrap().push(*verdict);
            }
            fn info(&mut self, _message: &str) {}
        }

        let seen = Arc::new(Mutex::new(Vec::new()));
        let (source, _) = StubFrameSource::new(frames_every(250, 2000));
        let mut s = CaptureSession::new(
            Box::new(source),
            Box::new(StubDetector::new(vec![good_detection(), good_detection()])),
            &SessionConfig::default(),
            Box::new(RecordingLogger(Arc::clone(&seen))),
        );

        s.run(|_| true).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Verdict::Rejected(RejectionReason::MultipleFaces); 2]
        );
    }
}
