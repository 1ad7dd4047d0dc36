//! Section Mapper — routes each CV section into its Export Document bucket.

use crate::export::dates::format_date;
use crate::export::document::{ExportBullet, ExportEntry, SkillGroup};
use crate::export::skills::{SkillBuckets, SkillClassifier};
use crate::models::cv::{CvSectionRow, SectionType};

/// Buckets after every section has been routed, still in processing order.
#[derive(Debug, Default)]
pub struct RoutedSections {
    pub experience: Vec<ExportEntry>,
    pub projects: Vec<ExportEntry>,
    pub education: Vec<ExportEntry>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<ExportEntry>,
    pub other: Vec<ExportEntry>,
}

pub struct SectionRouter<'a> {
    classifier: &'a dyn SkillClassifier,
    experience: Vec<ExportEntry>,
    projects: Vec<ExportEntry>,
    education: Vec<ExportEntry>,
    skills: SkillBuckets,
    certifications: Vec<ExportEntry>,
    other: Vec<ExportEntry>,
}

impl<'a> SectionRouter<'a> {
    pub fn new(classifier: &'a dyn SkillClassifier) -> Self {
        Self {
            classifier,
            experience: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
            skills: SkillBuckets::default(),
            certifications: Vec::new(),
            other: Vec::new(),
        }
    }

    /// Appends one section to its bucket. Skills sections contribute only
    /// their classified bullets; everything else about them is dropped.
    pub fn route(
        &mut self,
        section: &CvSectionRow,
        section_type: SectionType,
        bullets: Vec<ExportBullet>,
    ) {
        match section_type {
            SectionType::Experience => push_entry(&mut self.experience, section, bullets),
            SectionType::Projects => push_entry(&mut self.projects, section, bullets),
            SectionType::Education => push_entry(&mut self.education, section, bullets),
            SectionType::Other => push_entry(&mut self.other, section, bullets),
            SectionType::Certifications => {
                // Award-date semantics: a single date, falling back to the start date.
                let mut entry = build_entry(section, bullets, self.certifications.len());
                let start = entry.start_date.take();
                entry.end_date = entry.end_date.take().or(start);
                self.certifications.push(entry);
            }
            SectionType::Skills => {
                for bullet in bullets {
                    let category = self.classifier.classify(&bullet.content);
                    self.skills.push(category, bullet);
                }
            }
        }
    }

    pub fn finish(self) -> RoutedSections {
        RoutedSections {
            experience: self.experience,
            projects: self.projects,
            education: self.education,
            skills: self.skills.into_groups(),
            certifications: self.certifications,
            other: self.other,
        }
    }
}

fn push_entry(bucket: &mut Vec<ExportEntry>, section: &CvSectionRow, bullets: Vec<ExportBullet>) {
    let entry = build_entry(section, bullets, bucket.len());
    bucket.push(entry);
}

fn build_entry(section: &CvSectionRow, bullets: Vec<ExportBullet>, position: usize) -> ExportEntry {
    ExportEntry {
        id: section.id.to_string(),
        title: section.title.clone(),
        organization: section.organization.clone(),
        start_date: format_date(section.start_date.as_deref()),
        end_date: format_date(section.end_date.as_deref()),
        location: section.location.clone(),
        link: section.link.clone(),
        bullets,
        sort_order: position as u32 + 1,
    }
}
