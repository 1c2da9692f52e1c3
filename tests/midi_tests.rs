use drumhid::midi::{MessageAssembler, MessageKind, MidiMessage};
use proptest::prelude::*;

fn feed_bytes(assembler: &mut MessageAssembler, bytes: &[u8]) -> Vec<MidiMessage> {
    bytes.iter().filter_map(|&b| assembler.feed(b)).collect()
}

#[test]
fn test_note_on_completes_after_three_bytes() {
    let mut asm = MessageAssembler::new();
    let messages = feed_bytes(&mut asm, &[0x90, 0x2D, 0x64]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, MessageKind::NoteOn);
    assert_eq!(messages[0].channel, 0);
    assert_eq!(messages[0].note, 0x2D);
    assert_eq!(messages[0].velocity, 0x64);
}

#[test]
fn test_program_change_completes_after_two_bytes() {
    let mut asm = MessageAssembler::new();
    assert_eq!(asm.feed(0xC0), None);
    let msg = asm.feed(0x01).expect("program change is two bytes");
    assert_eq!(msg.as_bytes(), &[0xC0, 0x01]);
    assert_eq!(msg.kind, MessageKind::Other);
}

#[test]
fn test_channel_pressure_is_two_bytes() {
    let mut asm = MessageAssembler::new();
    let messages = feed_bytes(&mut asm, &[0xD5, 0x30]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].channel, 5);
}

#[test]
fn test_data_before_any_status_is_ignored() {
    let mut asm = MessageAssembler::new();
    let messages = feed_bytes(&mut asm, &[0x2D, 0x64, 0x00, 0x90, 0x2D, 0x64]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].as_bytes(), &[0x90, 0x2D, 0x64]);
}

#[test]
fn test_excess_data_bytes_are_dropped() {
    let mut asm = MessageAssembler::new();
    let messages = feed_bytes(&mut asm, &[0x80, 0x2D, 0x00, 0x2B, 0x00, 0x26]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, MessageKind::NoteOff);
}

#[test]
fn test_partial_message_discarded_by_new_status() {
    let mut asm = MessageAssembler::new();
    let messages = feed_bytes(&mut asm, &[0x90, 0x2D, 0xB0, 0x07, 0x40]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, MessageKind::ControlChange);
    assert_eq!(messages[0].as_bytes(), &[0xB0, 0x07, 0x40]);
}

#[test]
fn test_feed_all_matches_single_feeds() {
    let stream = [0x99, 0x26, 0x50, 0xC1, 0x05, 0x89, 0x26, 0x00];
    let mut single = MessageAssembler::new();
    let expected = feed_bytes(&mut single, &stream);

    let mut burst = MessageAssembler::new();
    let mut got = Vec::new();
    burst.feed_all(&stream, |m| got.push(m));

    assert_eq!(got, expected);
    assert_eq!(got.len(), 3);
}

fn status_byte() -> impl Strategy<Value = u8> {
    prop_oneof![0x80u8..=0x8F, 0x90u8..=0x9F, 0xB0u8..=0xBF, 0xC0u8..=0xCF, 0xD0u8..=0xDF]
}

fn message() -> impl Strategy<Value = Vec<u8>> {
    (status_byte(), 0u8..0x80, 0u8..0x80).prop_map(|(status, a, b)| {
        if matches!(status & 0xF0, 0xC0 | 0xD0) {
            vec![status, a]
        } else {
            vec![status, a, b]
        }
    })
}

proptest! {
    #[test]
    fn prop_one_message_per_well_formed_frame(
        frames in prop::collection::vec(message(), 0..32),
        split in 1usize..8,
    ) {
        let stream: Vec<u8> = frames.concat();

        let mut one_at_a_time = MessageAssembler::new();
        let singles = feed_bytes(&mut one_at_a_time, &stream);

        let mut chunked = MessageAssembler::new();
        let mut bursts = Vec::new();
        for chunk in stream.chunks(split) {
            chunked.feed_all(chunk, |m| bursts.push(m));
        }

        prop_assert_eq!(singles.len(), frames.len());
        prop_assert_eq!(&singles, &bursts);
        for (msg, frame) in singles.iter().zip(&frames) {
            prop_assert_eq!(msg.as_bytes(), frame.as_slice());
        }
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut asm = MessageAssembler::new();
        for msg in feed_bytes(&mut asm, &bytes) {
            prop_assert!(msg.len() == 2 || msg.len() == 3);
            prop_assert!(msg.status() & 0x80 != 0);
        }
    }
}
