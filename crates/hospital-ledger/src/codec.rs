//! Data file encoding.
//!
//! ```text
//! DOCTORS <count>
//!   DOCTOR / name / patientCount / surcharge / specialtyCount / specialty...
//! PATIENTS <count>
//!   PATIENT|EMERGENCY / name / disease / doctor / severity / roomNumber
//! ROOMS <count>
//!   1|0 per room
//! ```
//!
//! The doctor section is written for completeness but discarded on load: the
//! roster is always rebuilt and its counts re-derived from the patients.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use hospital_types::{Doctor, Patient, PatientKind};

use crate::parser::{parse, push_line, LedgerRecord, LineReader};
use crate::state::LedgerState;
use crate::types::{LedgerResult, LoadStats};

/// Section header for the doctor roster.
pub const DOCTORS_HEADER: &str = "DOCTORS";
/// Section header for the patient ledger.
pub const PATIENTS_HEADER: &str = "PATIENTS";
/// Section header for the room flags.
pub const ROOMS_HEADER: &str = "ROOMS";
/// Record tag for a doctor.
pub const DOCTOR_TAG: &str = "DOCTOR";

/// Field lines following a patient tag.
const PATIENT_FIELD_LINES: usize = 5;

impl LedgerRecord for Doctor {
    fn tag(&self) -> &'static str {
        DOCTOR_TAG
    }

    fn read_fields(tag: &str, reader: &mut LineReader<'_>) -> Option<Self> {
        if tag != DOCTOR_TAG {
            return None;
        }
        let name = reader.read_or_default().to_string();
        let patient_count = u32::try_from(parse::count(reader.read_or_default(), 0)).unwrap_or(0);
        let surcharge = parse::amount(reader.read_or_default());
        let specialty_count = parse::count(reader.read_or_default(), 0);

        let mut specialties = Vec::new();
        for _ in 0..specialty_count {
            match reader.next_line() {
                Some(specialty) if !specialty.is_empty() => specialties.push(specialty.to_string()),
                Some(_) => {}
                None => break,
            }
        }

        Some(Doctor {
            name,
            specialties,
            patient_count,
            surcharge,
        })
    }

    fn write_fields(&self, out: &mut String) {
        push_line(out, &self.name);
        push_line(out, self.patient_count);
        push_line(out, self.surcharge);
        push_line(out, self.specialties.len());
        for specialty in &self.specialties {
            push_line(out, specialty);
        }
    }
}

impl LedgerRecord for Patient {
    fn tag(&self) -> &'static str {
        self.kind.save_tag()
    }

    fn read_fields(tag: &str, reader: &mut LineReader<'_>) -> Option<Self> {
        let kind = PatientKind::from_tag(tag)?;
        Some(Patient {
            name: reader.read_or_default().to_string(),
            disease: reader.read_or_default().to_string(),
            assigned_doctor: reader.read_or_default().to_string(),
            severity: reader.read_or_default().to_string(),
            room_number: parse::room_number(reader.read_or_default()),
            kind,
        })
    }

    fn write_fields(&self, out: &mut String) {
        push_line(out, &self.name);
        push_line(out, &self.disease);
        push_line(out, &self.assigned_doctor);
        push_line(out, &self.severity);
        push_line(out, self.room_number);
    }
}

/// Encodes the full state: doctors, then patients, then rooms.
pub fn save(state: &LedgerState) -> String {
    let mut out = String::new();

    let doctors = state.registry().doctors();
    push_line(&mut out, format!("{} {}", DOCTORS_HEADER, doctors.len()));
    for doctor in doctors {
        doctor.write_record(&mut out);
    }

    let patients = state.ledger().list();
    push_line(&mut out, format!("{} {}", PATIENTS_HEADER, patients.len()));
    for patient in patients {
        patient.write_record(&mut out);
    }

    let flags = state.rooms().flags();
    push_line(&mut out, format!("{} {}", ROOMS_HEADER, flags.len()));
    for occupied in flags {
        push_line(&mut out, if *occupied { "1" } else { "0" });
    }

    out
}

/// Decodes a data file into a fresh state.
///
/// `room_capacity` sizes the pool when the file has no usable ROOMS section.
/// Malformed input never fails the load; short sections are abandoned and
/// missing fields read as defaults.
pub fn load(text: &str, room_capacity: usize) -> (LedgerState, LoadStats) {
    let mut state = LedgerState::new(room_capacity);
    let mut stats = LoadStats::default();
    let mut patients = Vec::new();
    let mut reader = LineReader::new(text);

    while let Some(line) = reader.next_line() {
        if let Some(rest) = line.strip_prefix(DOCTORS_HEADER) {
            stats.doctor_records_discarded += skip_doctors(&mut reader, parse::count(rest, 0));
        } else if let Some(rest) = line.strip_prefix(PATIENTS_HEADER) {
            read_patients(&mut reader, parse::count(rest, 0), &mut patients, &mut stats);
        } else if let Some(rest) = line.strip_prefix(ROOMS_HEADER) {
            let count = parse::room_count(rest, room_capacity);
            read_rooms(&mut reader, count, room_capacity, &mut state);
        }
    }

    // Stored counts are never trusted: occupancy and doctor counts come from
    // the patients themselves.
    for patient in patients {
        state.replay(patient);
    }

    stats.patients_loaded = state.ledger().len();
    stats.room_count = state.rooms().capacity();
    (state, stats)
}

/// Reads and discards up to `count` doctor records.
///
/// Stops at the first line that is not a doctor tag, leaving it unread.
fn skip_doctors(reader: &mut LineReader<'_>, count: usize) -> usize {
    let mut discarded = 0;
    for _ in 0..count {
        if reader.peek() != Some(DOCTOR_TAG) {
            tracing::warn!(
                line = reader.lines_read() + 1,
                "doctor section ended early, abandoning remaining records"
            );
            break;
        }
        reader.next_line();
        if Doctor::read_fields(DOCTOR_TAG, reader).is_some() {
            discarded += 1;
        }
    }
    discarded
}

fn read_patients(
    reader: &mut LineReader<'_>,
    count: usize,
    patients: &mut Vec<Patient>,
    stats: &mut LoadStats,
) {
    for _ in 0..count {
        let Some(tag) = reader.next_line() else {
            break;
        };
        match Patient::read_fields(tag, reader) {
            Some(patient) => patients.push(patient),
            None => {
                tracing::warn!(tag, line = reader.lines_read(), "unknown patient tag, record skipped");
                reader.skip(PATIENT_FIELD_LINES);
                stats.records_skipped += 1;
            }
        }
    }
}

/// Reads up to `count` room flags.
///
/// The pool grows with the flags actually present. A section that ends short
/// is padded with free rooms up to `count`, but never past `room_capacity`.
fn read_rooms(
    reader: &mut LineReader<'_>,
    count: usize,
    room_capacity: usize,
    state: &mut LedgerState,
) {
    let mut flags = Vec::new();
    while flags.len() < count {
        let Some(flag) = reader.next_line() else {
            break;
        };
        flags.push(parse::flag(flag));
    }
    if flags.len() < count {
        tracing::warn!(
            declared = count,
            read = flags.len(),
            "rooms section ended early"
        );
    }

    let rooms = state.rooms_mut();
    rooms.resize(flags.len().max(count.min(room_capacity)));
    for (index, occupied) in flags.into_iter().enumerate() {
        if occupied {
            rooms.occupy(index);
        } else {
            rooms.free(index);
        }
    }
}

/// Writes a full snapshot of `state` to `path`, replacing any previous file.
pub fn save_to_path<P: AsRef<Path>>(state: &LedgerState, path: P) -> LedgerResult<()> {
    fs::write(path, save(state))?;
    Ok(())
}

/// Loads `path` into a fresh state.
///
/// A file that cannot be read yields a fresh state and `None` stats: there is
/// simply no previous data.
pub fn load_from_path<P: AsRef<Path>>(path: P, room_capacity: usize) -> (LedgerState, Option<LoadStats>) {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            let (state, stats) = load(&text, room_capacity);
            (state, Some(stats))
        }
        Err(e) => {
            if e.kind() == ErrorKind::NotFound {
                tracing::info!(path = %path.display(), "no previous data found, starting fresh");
            } else {
                tracing::warn!(path = %path.display(), error = %e, "could not read data file, starting fresh");
            }
            (LedgerState::new(room_capacity), None)
        }
    }
}
