//! Interactive text menu.
//!
//! A thin loop that prompts for input, calls [`HospitalService`] and renders
//! the results. Generic over its input and output so it can be scripted.

use std::io::{self, BufRead, Write};

use hospital_types::{Bill, Doctor, Patient, PatientKind, SummaryReport};

use crate::service::HospitalService;

const MENU: &str = "\
--- Hospital Management System ---
1. Add Patient
2. Show All Patients
3. Show All Doctors
4. Generate Bill
5. Discharge Patient
6. Save To File
7. Summary Report
8. Add Emergency Patient
9. Show Emergency Patients
10. Generate Emergency Bill
11. Discharge Emergency Patient
0. Exit";

/// Menu commands, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Admit a regular patient.
    AddPatient,
    /// List every patient.
    ShowAllPatients,
    /// List the roster.
    ShowAllDoctors,
    /// Bill any patient.
    GenerateBill,
    /// Discharge any patient.
    DischargePatient,
    /// Write the data file.
    SaveToFile,
    /// Revenue per doctor.
    SummaryReport,
    /// Admit an emergency patient.
    AddEmergencyPatient,
    /// List emergency patients.
    ShowAllEmergencyPatients,
    /// Bill an emergency patient.
    GenerateEmergencyBill,
    /// Discharge an emergency patient.
    DischargeEmergencyPatient,
    /// Leave the loop.
    Exit,
}

impl Command {
    /// Maps a menu number to its command.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::AddPatient),
            2 => Some(Self::ShowAllPatients),
            3 => Some(Self::ShowAllDoctors),
            4 => Some(Self::GenerateBill),
            5 => Some(Self::DischargePatient),
            6 => Some(Self::SaveToFile),
            7 => Some(Self::SummaryReport),
            8 => Some(Self::AddEmergencyPatient),
            9 => Some(Self::ShowAllEmergencyPatients),
            10 => Some(Self::GenerateEmergencyBill),
            11 => Some(Self::DischargeEmergencyPatient),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until `Exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    service: &mut HospitalService,
    input: R,
    output: W,
) -> io::Result<()> {
    Menu { input, output }.run(service)
}

struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    fn run(&mut self, service: &mut HospitalService) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(line) = self.prompt("Enter choice: ")? else {
                return Ok(());
            };
            let Ok(choice) = line.parse::<u32>() else {
                writeln!(self.output, "Invalid input! Please enter a number.")?;
                continue;
            };
            match Command::from_choice(choice) {
                Some(Command::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Some(command) => self.dispatch(service, command)?,
                None => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn dispatch(&mut self, service: &mut HospitalService, command: Command) -> io::Result<()> {
        match command {
            Command::AddPatient => self.add_patient(service, PatientKind::Regular),
            Command::AddEmergencyPatient => self.add_patient(service, PatientKind::Emergency),
            Command::ShowAllPatients => self.show_patients(service),
            Command::ShowAllEmergencyPatients => self.show_emergency_patients(service),
            Command::ShowAllDoctors => {
                writeln!(self.output, "Doctors List:")?;
                for doctor in service.doctors() {
                    writeln!(self.output, "{}", render_doctor(doctor))?;
                }
                Ok(())
            }
            Command::GenerateBill => self.generate_bill(service, PatientKind::Regular),
            Command::GenerateEmergencyBill => self.generate_bill(service, PatientKind::Emergency),
            Command::DischargePatient => self.discharge(service, PatientKind::Regular),
            Command::DischargeEmergencyPatient => self.discharge(service, PatientKind::Emergency),
            Command::SaveToFile => match service.save() {
                Ok(()) => writeln!(self.output, "Data saved successfully."),
                Err(e) => writeln!(self.output, "Error saving file: {}", e),
            },
            Command::SummaryReport => {
                write!(self.output, "{}", render_summary(&service.summary_report()))
            }
            Command::Exit => Ok(()),
        }
    }

    /// Prints `text`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for a 1-based number; non-numbers read as 0.
    fn prompt_number(&mut self, text: &str) -> io::Result<Option<usize>> {
        Ok(self.prompt(text)?.map(|s| s.parse().unwrap_or(0)))
    }

    fn add_patient(&mut self, service: &mut HospitalService, kind: PatientKind) -> io::Result<()> {
        let label = if kind.is_emergency() {
            "emergency patient"
        } else {
            "patient"
        };
        let Some(name) = self.prompt(&format!("Enter {} name: ", label))? else {
            return Ok(());
        };
        if let Err(e) = HospitalService::check_name(&name) {
            return writeln!(self.output, "{}", e);
        }

        writeln!(self.output, "Available diseases:")?;
        for (i, disease) in service.diseases().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, disease)?;
        }
        let Some(choice) = self.prompt_number("Choose disease number: ")? else {
            return Ok(());
        };
        let Some(severity) = self.prompt("Enter severity (Mild/Moderate/Severe): ")? else {
            return Ok(());
        };

        let plan = match service.plan_admission(&name, choice, &severity, kind) {
            Ok(plan) => plan,
            Err(e) => return writeln!(self.output, "{}", e),
        };
        if plan.severity_coerced {
            writeln!(
                self.output,
                "Invalid severity! Using '{}' as default.",
                plan.severity
            )?;
        }

        let mut requested = None;
        if !kind.is_emergency() {
            writeln!(self.output, "Doctors who can treat {}:", plan.disease)?;
            let doctors = service.doctors_for_disease(&plan.disease);
            if doctors.is_empty() {
                writeln!(self.output, "No doctors found for this disease.")?;
            }
            for doctor in doctors {
                writeln!(
                    self.output,
                    "- {} (Current Patients: {}, Surcharge: Rs.{})",
                    doctor.name, doctor.patient_count, doctor.surcharge
                )?;
            }
        }
        writeln!(
            self.output,
            "\nRecommended doctor (least cost): {}",
            plan.recommended_doctor
        )?;
        if !kind.is_emergency() {
            let answer = self
                .prompt("Do you want to accept this doctor? (y/n): ")?
                .unwrap_or_default();
            if !answer.eq_ignore_ascii_case("y") {
                requested = self.prompt("Enter the name of doctor you want: ")?;
            }
        }

        match service.commit_admission(&plan, requested.as_deref()) {
            Ok(admission) => {
                if admission.doctor_fallback {
                    writeln!(self.output, "Doctor not found! Using recommended doctor.")?;
                }
                writeln!(
                    self.output,
                    "{} added! Assigned Doctor: {}, Room: {}",
                    admission.patient.kind.display_label(),
                    admission.patient.assigned_doctor,
                    admission.patient.room_number
                )
            }
            Err(e) => writeln!(self.output, "Sorry, {}. Cannot admit patient.", e),
        }
    }

    fn show_patients(&mut self, service: &HospitalService) -> io::Result<()> {
        if service.patients().is_empty() {
            return writeln!(self.output, "No patients in the system.");
        }
        writeln!(self.output, "Patients List:")?;
        for (i, patient) in service.patients().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, render_patient(patient))?;
        }
        Ok(())
    }

    fn show_emergency_patients(&mut self, service: &HospitalService) -> io::Result<()> {
        let emergency = service.emergency_patients();
        if emergency.is_empty() {
            return writeln!(self.output, "No emergency patients in the system.");
        }
        writeln!(self.output, "Emergency Patients List:")?;
        for (index, patient) in emergency {
            writeln!(self.output, "{}. {}", index + 1, render_patient(patient))?;
        }
        Ok(())
    }

    /// Lists the selectable patients and reads a 1-based choice.
    ///
    /// Returns the 0-based position within the listing.
    fn select(
        &mut self,
        service: &HospitalService,
        kind: PatientKind,
        action: &str,
    ) -> io::Result<Option<usize>> {
        let listing: Vec<&Patient> = match kind {
            PatientKind::Regular => service.patients().iter().collect(),
            PatientKind::Emergency => service
                .emergency_patients()
                .into_iter()
                .map(|(_, p)| p)
                .collect(),
        };
        let noun = if kind.is_emergency() {
            "emergency patient"
        } else {
            "patient"
        };
        if listing.is_empty() {
            writeln!(self.output, "No {}s in system.", noun)?;
            return Ok(None);
        }

        writeln!(self.output, "Select {} number {}:", noun, action)?;
        for (i, patient) in listing.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, render_patient(patient))?;
        }
        Ok(self.prompt_number("")?.map(|choice| choice.wrapping_sub(1)))
    }

    fn generate_bill(&mut self, service: &HospitalService, kind: PatientKind) -> io::Result<()> {
        let Some(position) = self.select(service, kind, "for bill")? else {
            return Ok(());
        };
        let bill = match kind {
            PatientKind::Regular => service.generate_bill(position),
            PatientKind::Emergency => service.generate_emergency_bill(position),
        };
        match bill {
            Ok(bill) => write!(self.output, "{}", render_bill(&bill)),
            Err(_) => writeln!(self.output, "Invalid choice!"),
        }
    }

    fn discharge(&mut self, service: &mut HospitalService, kind: PatientKind) -> io::Result<()> {
        let Some(position) = self.select(service, kind, "to discharge")? else {
            return Ok(());
        };
        let discharged = match kind {
            PatientKind::Regular => service.discharge_patient(position),
            PatientKind::Emergency => service.discharge_emergency_patient(position),
        };
        match discharged {
            Ok(patient) => writeln!(
                self.output,
                "{} {} discharged and room {} is now free.",
                patient.kind.display_label(),
                patient.name,
                patient.room_number
            ),
            Err(_) => writeln!(self.output, "Invalid choice!"),
        }
    }
}

fn render_patient(patient: &Patient) -> String {
    format!(
        "{}: {}, Disease: {}, Doctor: {}, Severity: {}, Room: {}",
        patient.kind.display_label(),
        patient.name,
        patient.disease,
        patient.assigned_doctor,
        patient.severity,
        patient.room_number
    )
}

fn render_doctor(doctor: &Doctor) -> String {
    format!(
        "Doctor: {}, Specialties: {}, Patients: {}, Surcharge: Rs.{}",
        doctor.name,
        doctor.specialties.join(", "),
        doctor.patient_count,
        doctor.surcharge
    )
}

fn render_bill(bill: &Bill) -> String {
    let (title, total, rule) = if bill.kind.is_emergency() {
        ("EMERGENCY BILL", "Total Emergency Cost", "==========================")
    } else {
        ("BILL", "Total Cost", "================")
    };
    format!(
        "\n===== {} =====\nPatient Name: {}\nDisease: {}\nSeverity: {}\nAssigned Doctor: {}\nRoom Number: {}\n{}: Rs.{}\n{}\n",
        title,
        bill.patient_name,
        bill.disease,
        bill.severity,
        bill.doctor,
        bill.room_number,
        total,
        bill.cost,
        rule
    )
}

fn render_summary(report: &SummaryReport) -> String {
    let mut out = String::from("\n===== HOSPITAL SUMMARY REPORT =====\n");
    for row in &report.doctors {
        out.push_str(&format!(
            "Doctor: {}, Patients Treated: {}, Revenue: Rs.{}\n",
            row.doctor, row.patients, row.revenue
        ));
    }
    out.push_str(&format!(
        "Total Hospital Revenue: Rs.{}\n===================================\n",
        report.total_revenue
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_ledger::LedgerConfig;

    fn run_script(service: &mut HospitalService, script: &str) -> String {
        let mut output = Vec::new();
        run(service, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_command_numbers() {
        assert_eq!(Command::from_choice(1), Some(Command::AddPatient));
        assert_eq!(Command::from_choice(11), Some(Command::DischargeEmergencyPatient));
        assert_eq!(Command::from_choice(0), Some(Command::Exit));
        assert_eq!(Command::from_choice(12), None);
    }

    #[test]
    fn test_add_patient_accepting_recommendation() {
        let mut service = HospitalService::new(LedgerConfig::default());
        let out = run_script(&mut service, "1\nAlice\n1\nMild\ny\n4\n1\n0\n");

        assert!(out.contains("Recommended doctor (least cost): Dr. Smith"));
        assert!(out.contains("Patient added! Assigned Doctor: Dr. Smith, Room: 1"));
        assert!(out.contains("Total Cost: Rs.1800"));
        assert!(out.contains("Exiting..."));
        assert_eq!(service.patients().len(), 1);
    }

    #[test]
    fn test_add_patient_with_unknown_doctor() {
        let mut service = HospitalService::new(LedgerConfig::default());
        let out = run_script(&mut service, "1\nAlice\n1\nBad\nn\nDr. Who\n0\n");

        assert!(out.contains("Invalid severity! Using 'Mild' as default."));
        assert!(out.contains("Doctor not found! Using recommended doctor."));
        assert_eq!(service.patients()[0].assigned_doctor, "Dr. Smith");
    }

    #[test]
    fn test_emergency_flow() {
        let mut service = HospitalService::new(LedgerConfig::default());
        let out = run_script(&mut service, "8\nBob\n10\nSevere\n9\n10\n1\n11\n1\n9\n0\n");

        assert!(out.contains("Emergency Patient added! Assigned Doctor: Dr. Clark, Room: 1"));
        assert!(out.contains("Total Emergency Cost: Rs.18750"));
        assert!(out.contains("Emergency Patient Bob discharged and room 1 is now free."));
        assert!(out.contains("No emergency patients in the system."));
        assert!(service.patients().is_empty());
    }

    #[test]
    fn test_invalid_inputs_do_not_admit() {
        let mut service = HospitalService::new(LedgerConfig::default());
        let out = run_script(&mut service, "abc\n42\n1\n\n1\nAlice\n99\nMild\n0\n");

        assert!(out.contains("Invalid input! Please enter a number."));
        assert!(out.contains("Invalid choice!"));
        assert!(out.contains("Invalid name"));
        assert!(out.contains("Invalid disease choice"));
        assert!(service.patients().is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut service = HospitalService::new(LedgerConfig::default());
        let out = run_script(&mut service, "2\n");
        assert!(out.contains("No patients in the system."));
    }

    #[test]
    fn test_summary_and_doctors() {
        let mut service = HospitalService::new(LedgerConfig::default());
        service.add_patient("Alice", 1, "Mild", None).unwrap();
        let out = run_script(&mut service, "3\n7\n0\n");

        assert!(out.contains("Doctor: Dr. Smith, Specialties: Flu, Cold, Patients: 1, Surcharge: Rs.800"));
        assert!(out.contains("Doctor: Dr. Smith, Patients Treated: 1, Revenue: Rs.1800"));
        assert!(out.contains("Total Hospital Revenue: Rs.1800"));
    }

    #[test]
    fn test_save_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hospital_data.txt");
        let mut service = HospitalService::new(LedgerConfig::with_data_file(&path));
        service.add_patient("Alice", 1, "Mild", None).unwrap();

        let out = run_script(&mut service, "6\n0\n");
        assert!(out.contains("Data saved successfully."));
        assert!(path.exists());
    }

    #[test]
    fn test_discharge_invalid_choice() {
        let mut service = HospitalService::new(LedgerConfig::default());
        service.add_patient("Alice", 1, "Mild", None).unwrap();
        let out = run_script(&mut service, "5\n7\n0\n");
        assert!(out.contains("Invalid choice!"));
        assert_eq!(service.patients().len(), 1);
    }
}
