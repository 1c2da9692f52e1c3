use drumhid::mapping::Slot;
use drumhid::midi::{MessageAssembler, MessageKind, MidiMessage};
use drumhid::report::{ANY_PAD_FLAG, IDLE_REPORT};
use drumhid::state::ControllerState;
use drumhid::translator::Translator;

#[test]
fn test_default_initialization() {
    let state = ControllerState::new();
    assert_eq!(state.snapshot(), IDLE_REPORT);
    assert!(!state.activity());
}

#[test]
fn test_pad_round_trip_restores_slot() {
    for pad in Slot::PADS {
        let index = pad.pad_index().unwrap();
        let mut state = ControllerState::new();
        let before = state.snapshot();

        state.apply(MessageKind::NoteOn, pad, 77);
        assert_eq!(state.snapshot().primary & (1 << index), 1 << index);
        assert_eq!(state.snapshot().pad_velocity(index), 77);

        state.apply(MessageKind::NoteOff, pad, 0);
        let after = state.snapshot();
        assert_eq!(after.primary & (1 << index), 0);
        assert_eq!(after.pad_velocity(index), 0);
        assert_eq!(after, before);
    }
}

#[test]
fn test_note_off_is_idempotent() {
    let mut state = ControllerState::new();
    state.apply(MessageKind::NoteOn, Slot::Pad3, 40);
    state.apply(MessageKind::NoteOff, Slot::Pad3, 0);
    let once = state.snapshot();
    state.apply(MessageKind::NoteOff, Slot::Pad3, 0);
    assert_eq!(state.snapshot(), once);

    state.apply(MessageKind::NoteOff, Slot::SpecialA, 0);
    state.apply(MessageKind::NoteOff, Slot::SpecialA, 0);
    assert_eq!(state.snapshot(), once);
}

#[test]
fn test_special_slots_use_secondary_bits() {
    let mut state = ControllerState::new();
    state.apply(MessageKind::NoteOn, Slot::SpecialA, 100);
    assert_eq!(state.snapshot().secondary, 0x10);
    assert_eq!(state.snapshot().primary, 0);
    assert!(!state.activity());

    state.apply(MessageKind::NoteOn, Slot::SpecialB, 100);
    assert_eq!(state.snapshot().secondary, 0x12);

    state.apply(MessageKind::NoteOff, Slot::SpecialA, 0);
    assert_eq!(state.snapshot().secondary, 0x02);
    assert_eq!(state.snapshot().aux8, IDLE_REPORT.aux8);
}

#[test]
fn test_fixed_fields_never_change() {
    let mut state = ControllerState::new();
    for slot in [Slot::Pad0, Slot::Pad1, Slot::SpecialA, Slot::Unmapped] {
        state.apply(MessageKind::NoteOn, slot, 127);
    }
    let report = state.snapshot();
    assert_eq!(report.hat, IDLE_REPORT.hat);
    assert_eq!(report.axes, IDLE_REPORT.axes);
    assert_eq!(report.aux16, IDLE_REPORT.aux16);
}

#[test]
fn test_scenario_strike_and_release_pad_zero() {
    let mut translator: Translator = Translator::new();

    assert!(translator.process(&MidiMessage::from_raw([0x90, 0x2D, 0x64], 3)));
    let struck = translator.state().snapshot();
    assert_eq!(struck.primary & 0x01, 0x01);
    assert_eq!(struck.secondary & ANY_PAD_FLAG, ANY_PAD_FLAG);
    assert_eq!(struck.pad_velocity(0), 100);
    assert_eq!(translator.queue().len(), 1);

    assert!(translator.process(&MidiMessage::from_raw([0x80, 0x2D, 0x00], 3)));
    assert_eq!(translator.queue().len(), 2);

    let queue = translator.queue_mut();
    let first = queue.pop().unwrap();
    let second = queue.pop().unwrap();
    assert_eq!(first, struck);
    assert_eq!(second.primary & 0x01, 0);
    assert_eq!(second.pad_velocity(0), 0);
    assert_eq!(second.echo(), [0x80, 0x2D, 0x00]);
    assert!(queue.is_empty());
}

#[test]
fn test_scenario_program_change_pushes_nothing() {
    let mut translator: Translator = Translator::new();
    let msg = MidiMessage::from_raw([0xC0, 0x01, 0x00], 2);
    assert!(!translator.process(&msg));
    assert!(translator.queue().is_empty());
    assert_eq!(translator.processed(), 0);
}

#[test]
fn test_unmapped_note_message_echoes_and_pushes() {
    let mut translator: Translator = Translator::new();
    assert!(translator.process(&MidiMessage::from_raw([0x90, 0xFF, 0x40], 3)));

    let report = translator.queue_mut().pop().unwrap();
    assert_eq!(report.primary, 0);
    assert_eq!(report.secondary, 0);
    assert_eq!(report.echo(), [0x90, 0xFF, 0x40]);
    assert!(!translator.state().activity());
}

#[test]
fn test_unmapped_note_off_still_pushes() {
    let mut translator: Translator = Translator::new();
    translator.process(&MidiMessage::note_on(0, 0x2B, 90));
    assert!(translator.process(&MidiMessage::note_off(0, 0x01, 0)));

    let queue = translator.queue_mut();
    queue.pop();
    let report = queue.pop().unwrap();
    assert_eq!(report.primary, 0x02);
    assert_eq!(report.pad_velocity(1), 90);
    assert_eq!(report.echo(), [0x80, 0x01, 0x00]);
}

#[test]
fn test_channel_is_ignored_for_mapping() {
    let mut translator: Translator = Translator::new();
    translator.process(&MidiMessage::note_on(9, 0x26, 55));
    assert_eq!(translator.state().snapshot().primary, 0x04);
}

fn feed_into(translator: &mut Translator, bytes: &[u8]) -> usize {
    let mut assembler = MessageAssembler::new();
    let mut completed = 0;
    assembler.feed_all(bytes, |msg| {
        completed += 1;
        translator.process(&msg);
    });
    completed
}

#[test]
fn test_high_bit_note_byte_restarts_and_pushes_nothing() {
    let mut translator: Translator = Translator::new();

    // 0xFF is a status byte, so the note-on never completes.
    assert_eq!(feed_into(&mut translator, &[0x90, 0xFF, 0x40]), 0);
    assert!(translator.queue().is_empty());
    assert_eq!(translator.processed(), 0);
    assert_eq!(translator.state().snapshot(), IDLE_REPORT);
}

#[test]
fn test_byte_fed_unmapped_note_echoes_and_pushes() {
    let mut translator: Translator = Translator::new();

    assert_eq!(feed_into(&mut translator, &[0x90, 0x7F, 0x40]), 1);
    assert_eq!(translator.queue().len(), 1);

    let report = translator.queue_mut().pop().unwrap();
    assert_eq!(report.primary, 0);
    assert_eq!(report.secondary, 0);
    assert_eq!(report.echo(), [0x90, 0x7F, 0x40]);
}
