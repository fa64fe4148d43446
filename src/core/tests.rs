#[cfg(test)]
mod tests {
    use crate::core::{
        ChatScript, ChatSequencer, IntersectionSample, PlaybackPhase, ScriptMessage, Speaker,
        VisibilityOptions, VisibilityTrigger,
    };
    use std::time::Duration;

    /// Snapshot of the observable playback state at a point in time
    #[derive(Debug, Clone, PartialEq)]
    struct Frame {
        at_ms: u64,
        revealed: usize,
        typing: Option<usize>,
        phase: PlaybackPhase,
    }

    /// Drive a sequencer the way the browser loop does, on a virtual clock.
    /// Records a frame after the activation and after every fired tick.
    fn play(sequencer: &mut ChatSequencer, visible_at_ms: u64) -> Vec<Frame> {
        let mut now = Duration::from_millis(visible_at_ms);
        let mut frames = Vec::new();
        let mut tick = sequencer.on_host_visibility(true);
        frames.push(frame(sequencer, now));

        while let Some(pending) = tick {
            now += pending.delay;
            tick = sequencer.fire(pending.epoch);
            frames.push(frame(sequencer, now));
        }
        frames
    }

    fn frame(sequencer: &ChatSequencer, now: Duration) -> Frame {
        Frame {
            at_ms: now.as_millis() as u64,
            revealed: sequencer.revealed().len(),
            typing: sequencer.typing_index(),
            phase: sequencer.phase(),
        }
    }

    fn first_frame_where(frames: &[Frame], pred: impl Fn(&Frame) -> bool) -> Option<u64> {
        frames.iter().find(|f| pred(f)).map(|f| f.at_ms)
    }

    fn hi_q1_a1() -> ChatScript {
        ChatScript::from(vec![
            ScriptMessage::agent("Hi"),
            ScriptMessage::customer("Q1"),
            ScriptMessage::agent("A1"),
        ])
    }

    #[test]
    fn test_scenario_timeline() {
        let mut sequencer = ChatSequencer::new(hi_q1_a1());

        let frames = play(&mut sequencer, 0);

        assert_eq!(first_frame_where(&frames, |f| f.typing == Some(0)), Some(1300));
        assert_eq!(first_frame_where(&frames, |f| f.revealed == 1), Some(2000));
        assert_eq!(first_frame_where(&frames, |f| f.revealed == 2), Some(3200));
        assert_eq!(first_frame_where(&frames, |f| f.typing == Some(2)), Some(3900));
        assert_eq!(first_frame_where(&frames, |f| f.revealed == 3), Some(4600));
        assert_eq!(frames.last().unwrap().phase, PlaybackPhase::Done);
        assert_eq!(frames.last().unwrap().at_ms, 4600);

        let texts: Vec<String> = sequencer.revealed().iter().map(|m| m.text.to_string()).collect();
        assert_eq!(texts, vec!["Hi", "Q1", "A1"]);
    }

    #[test]
    fn test_completed_run_reveals_whole_script_in_order() {
        let scripts = vec![
            ChatScript::default(),
            hi_q1_a1(),
            ChatScript::from(vec![ScriptMessage::customer("only customer")]),
            ChatScript::from(vec![
                ScriptMessage::customer("a"),
                ScriptMessage::customer("b"),
                ScriptMessage::agent("c"),
                ScriptMessage::agent("d"),
            ]),
            ChatScript::from(Vec::new()),
        ];

        for script in scripts {
            let mut sequencer = ChatSequencer::new(script.clone());
            play(&mut sequencer, 0);

            assert!(sequencer.is_done());
            assert_eq!(sequencer.revealed(), script.messages());
            assert!(sequencer.typing_index().is_none());
        }
    }

    #[test]
    fn test_revealed_grows_monotonically_and_typing_tracks_agent() {
        let mut sequencer = ChatSequencer::new(ChatScript::default());

        let frames = play(&mut sequencer, 0);

        for pair in frames.windows(2) {
            assert!(pair[1].revealed >= pair[0].revealed);
            assert!(pair[1].revealed - pair[0].revealed <= 1);
        }

        for f in &frames {
            if let Some(index) = f.typing {
                assert_eq!(index, f.revealed);
                assert_eq!(sequencer.script()[index].speaker, Speaker::Agent);
                assert_eq!(f.phase, PlaybackPhase::AwaitingAgentTyping(index));
            }
            if let PlaybackPhase::AwaitingAgentTyping(index) = f.phase {
                assert_eq!(f.typing, Some(index));
            }
        }
    }

    #[test]
    fn test_agent_lines_always_show_typing_first() {
        let script = ChatScript::default();
        let mut sequencer = ChatSequencer::new(script.clone());

        let frames = play(&mut sequencer, 0);

        for (index, message) in script.iter().enumerate() {
            let typed = frames.iter().any(|f| f.typing == Some(index));
            assert_eq!(typed, message.is_agent(), "message {}", index);
        }
    }

    #[test]
    fn test_visibility_toggles_never_replay() {
        let mut sequencer = ChatSequencer::new(hi_q1_a1());
        play(&mut sequencer, 0);
        let finished = sequencer.clone();

        for visible in [false, true, false, true] {
            assert!(sequencer.on_host_visibility(visible).is_none());
        }
        assert_eq!(sequencer, finished);
    }

    #[test]
    fn test_unmount_mid_reveal_stops_writes() {
        let mut sequencer = ChatSequencer::new(hi_q1_a1());
        let mut now = 0u64;
        let mut tick = sequencer.on_host_visibility(true);

        // Advance until the next scheduled transition lies beyond 1200ms
        while let Some(pending) = tick {
            if now + pending.delay.as_millis() as u64 > 1200 {
                break;
            }
            now += pending.delay.as_millis() as u64;
            tick = sequencer.fire(pending.epoch);
        }
        let pending = tick.expect("sequence should still be running at 1200ms");

        sequencer.cancel();
        let snapshot = sequencer.clone();

        assert!(sequencer.fire(pending.epoch).is_none());
        assert!(sequencer.on_host_visibility(true).is_none());
        assert_eq!(sequencer, snapshot);
        assert!(sequencer.revealed().is_empty());
    }

    #[test]
    fn test_visibility_gates_sequencer_start() {
        let mut trigger = VisibilityTrigger::new(VisibilityOptions::default());
        let mut sequencer = ChatSequencer::new(hi_q1_a1());
        let watcher = trigger.attach().unwrap();

        // Below threshold: nothing starts
        trigger.on_intersection(watcher, IntersectionSample::new(true, 0.05));
        assert!(sequencer.on_host_visibility(trigger.is_visible()).is_none());

        trigger.on_intersection(watcher, IntersectionSample::new(true, 0.4));
        let tick = sequencer.on_host_visibility(trigger.is_visible());
        assert!(tick.is_some());
        assert_eq!(sequencer.phase(), PlaybackPhase::Settling);
    }
}
