//! Brazilian Portuguese catalog for the DevBr UI

use super::tree::{Node, TranslationTree};

/// Locale code of this catalog
pub const LOCALE: &str = "pt-BR";

/// Build the pt-BR translation tree
pub fn catalog() -> TranslationTree {
    TranslationTree::new([
        // Header and navigation
        (
            "header",
            Node::interior([
                ("title", Node::leaf("DevBr - Desenvolvimento Brasil")),
                ("subtitle", Node::leaf("Agente de IA para desenvolvimento full-stack")),
                ("starOnGitHub", Node::leaf("⭐ GitHub")),
                ("userMenu", Node::leaf("Menu do usuário")),
                ("settings", Node::leaf("Configurações e Uso")),
                ("logout", Node::leaf("Sair")),
            ]),
        ),
        (
            "actions",
            Node::interior([
                ("download", Node::leaf("Baixar Código")),
                ("share", Node::leaf("Compartilhar")),
                ("deploy", Node::leaf("Publicar")),
                ("newProject", Node::leaf("Novo projeto")),
                ("save", Node::leaf("Salvar")),
                ("cancel", Node::leaf("Cancelar")),
                ("close", Node::leaf("Fechar")),
                ("copy", Node::leaf("Copiar")),
                ("edit", Node::leaf("Editar")),
                ("delete", Node::leaf("Excluir")),
            ]),
        ),
        // Deploy button states
        (
            "deploy",
            Node::interior([
                ("idle", Node::leaf("Publicar")),
                ("building", Node::leaf("Construindo...")),
                ("zipping", Node::leaf("Empacotando...")),
                ("deploying", Node::leaf("Publicando...")),
                ("deployed", Node::leaf("Publicado")),
                ("redeploy", Node::leaf("Republicar")),
                ("viewSite", Node::leaf("Ver site")),
                ("tooltipDeploy", Node::leaf("Clique para publicar sua aplicação")),
                ("tooltipRedeploy", Node::leaf("Clique para publicar novamente")),
            ]),
        ),
        (
            "share",
            Node::interior([
                ("title", Node::leaf("Compartilhar projeto")),
                ("saving", Node::leaf("Salvando...")),
                ("saved", Node::leaf("Salvo")),
                ("saveSettings", Node::leaf("Salvar configurações")),
                ("setThumbnail", Node::leaf("Definir Miniatura")),
                ("copyLink", Node::leaf("Copiar link")),
                ("openInNewTab", Node::leaf("Abrir em nova aba")),
            ]),
        ),
        // Toasts
        (
            "messages",
            Node::interior([
                (
                    "success",
                    Node::interior([
                        ("linkCopied", Node::leaf("Link copiado para a área de transferência!")),
                        ("settingsSaved", Node::leaf("Configurações de compartilhamento salvas")),
                    ]),
                ),
                (
                    "error",
                    Node::interior([
                        ("deployFailed", Node::leaf("Falha ao publicar. Tente novamente.")),
                        (
                            "shareFailed",
                            Node::leaf(
                                "Falha ao atualizar configurações de compartilhamento. Tente novamente.",
                            ),
                        ),
                        ("snapshotFailed", Node::leaf("Falha ao criar snapshot. Tente novamente.")),
                        ("updateFileFailed", Node::leaf("Falha ao atualizar conteúdo do arquivo")),
                    ]),
                ),
            ]),
        ),
        (
            "terminal",
            Node::interior([
                ("devServer", Node::leaf("Servidor Dev")),
                ("convexDeploy", Node::leaf("Deploy Convex")),
                ("terminal", Node::leaf("Terminal")),
            ]),
        ),
        (
            "general",
            Node::interior([
                ("loading", Node::leaf("Carregando...")),
                ("error", Node::leaf("Erro")),
                ("success", Node::leaf("Sucesso")),
                ("warning", Node::leaf("Aviso")),
                ("info", Node::leaf("Informação")),
            ]),
        ),
    ])
}
