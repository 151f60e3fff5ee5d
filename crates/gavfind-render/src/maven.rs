use crate::MavenProject;
use crate::xml::escape;
use gavfind_types::ArtifactIdentity;

pub fn render_pom(dependencies: &[ArtifactIdentity], project: &MavenProject) -> String {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<project xmlns=\"http://maven.apache.org/POM/4.0.0\"\n");
    out.push_str(
        "    xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xsi:schemaLocation=\"http://maven.apache.org/POM/4.0.0 \
         http://maven.apache.org/xsd/maven-4.0.0.xsd\">\n",
    );
    out.push_str("    <modelVersion>4.0.0</modelVersion>\n\n");
    out.push_str(&format!(
        "    <groupId>{}</groupId>\n",
        escape(&project.group_id)
    ));
    out.push_str(&format!(
        "    <artifactId>{}</artifactId>\n",
        escape(&project.artifact_id)
    ));
    out.push_str(&format!(
        "    <version>{}</version>\n",
        escape(&project.version)
    ));
    out.push_str(&format!("    <name>{}</name>\n\n", escape(&project.name)));

    if !dependencies.is_empty() {
        out.push_str("    <dependencies>\n");
        for dep in dependencies {
            out.push_str("        <dependency>\n");
            out.push_str(&format!(
                "            <groupId>{}</groupId>\n",
                escape(&dep.group_id)
            ));
            out.push_str(&format!(
                "            <artifactId>{}</artifactId>\n",
                escape(&dep.artifact_id)
            ));
            out.push_str(&format!(
                "            <version>{}</version>\n",
                escape(&dep.version)
            ));
            out.push_str("        </dependency>\n");
        }
        out.push_str("    </dependencies>\n");
    }

    out.push_str("</project>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pom_has_no_dependencies_block() {
        let pom = render_pom(&[], &MavenProject::default());
        assert!(pom.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(pom.contains("    <groupId>com.bcs.mvn.test</groupId>\n"));
        assert!(pom.contains("    <artifactId>mvn-sample</artifactId>\n"));
        assert!(!pom.contains("<dependencies>"));
        assert!(pom.ends_with("</project>\n"));
    }

    #[test]
    fn dependencies_are_listed_in_order() {
        let deps = vec![
            ArtifactIdentity::new("junit", "junit", "4.12"),
            ArtifactIdentity::new("org.slf4j", "slf4j-api", "1.7.30"),
        ];
        let pom = render_pom(&deps, &MavenProject::default());

        let expected_block = [
            "    <dependencies>",
            "        <dependency>",
            "            <groupId>junit</groupId>",
            "            <artifactId>junit</artifactId>",
            "            <version>4.12</version>",
            "        </dependency>",
            "        <dependency>",
            "            <groupId>org.slf4j</groupId>",
            "            <artifactId>slf4j-api</artifactId>",
            "            <version>1.7.30</version>",
            "        </dependency>",
            "    </dependencies>",
            "</project>",
            "",
        ]
        .join("\n");
        assert!(pom.contains(&expected_block), "pom was:\n{pom}");
    }

    #[test]
    fn coordinates_are_escaped() {
        let deps = vec![ArtifactIdentity::new("g", "a<b>", "1&2")];
        let pom = render_pom(&deps, &MavenProject::default());
        assert!(pom.contains("<artifactId>a&lt;b&gt;</artifactId>"));
        assert!(pom.contains("<version>1&amp;2</version>"));
    }
}
