const DOCUMENT_PLACEHOLDER: &str = "{document_text}";

const EXTRACTION_TEMPLATE: &str = r#"Extract the following information from this Indonesian BKD (Beban Kerja Dosen) document and return ONLY valid JSON with no additional text or markdown:

BKD Document Text:
{document_text}

Extract these fields:
{
  "nama": "full name from document",
  "fakultas_departemen": "faculty/department name",
  "jurusan_program_studi": "major/study program",
  "perguruan_tinggi": "university name",
  "total_sks_bkd": total SKS as number,
  "total_teaching_sks": teaching SKS as number,
  "total_research_sks": research SKS as number,
  "total_service_sks": service SKS as number,
  "total_advisees": number of academic advisees,
  "number_of_courses": {
    "Course Name 1": number of classes,
    "Course Name 2": number of classes
  },
  "journal_publications": [
    {
      "title": "publication title",
      "journal_name": "journal name",
      "publication_date": "date"
    }
  ],
  "semester_year": "semester and year (e.g., GENAP 2024/2025)"
}

Return ONLY the JSON object, no markdown code blocks or additional text."#;

/// Interpolates the document text verbatim into the extraction instructions.
pub fn build_extraction_prompt(document_text: &str) -> String {
    EXTRACTION_TEMPLATE.replacen(DOCUMENT_PLACEHOLDER, document_text, 1)
}
